//! Repository trait definitions.

use campus_core::{Interface, NewUser, Repository, UpdateUser, User, UserCriteria, UserId};

/// Domain-facing user repository interface.
///
/// The operation set is the generic [`Repository`] contract
/// instantiated for the user entity and its DTOs.
pub trait UserRepository:
    Repository<UserId, User, NewUser, UpdateUser, UserCriteria> + Interface
{
}
