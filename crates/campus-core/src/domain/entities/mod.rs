//! Domain entities.

pub mod user;

pub use user::{NewUser, UpdateUser, User, UserCriteria};
