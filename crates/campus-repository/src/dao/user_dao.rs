//! `UserDao` trait — low-level user data access abstraction.
//!
//! This is the persistence client interface the repository delegates
//! to: one method per client capability, operating purely on storage
//! shapes ([`UserRecord`], [`UserFilter`]). Implementations connect to
//! a single data source; tests substitute an in-memory fake.
//!
//! [`UserRecord`]: crate::dao::UserRecord
//! [`UserFilter`]: crate::dao::UserFilter

use crate::dao::{UserFilter, UserRecord};
use campus_core::{CampusResult, Interface, NewUser, UpdateUser};
use async_trait::async_trait;

/// Low-level user data access object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Inserts a new user row and returns it, including the generated id.
    async fn create(&self, data: &NewUser) -> CampusResult<UserRecord>;

    /// Fetches a row by primary key.
    async fn find_unique(&self, id: i64) -> CampusResult<Option<UserRecord>>;

    /// Deletes a row by primary key and returns its prior state.
    /// Fails if no row exists with that id.
    async fn delete(&self, id: i64) -> CampusResult<UserRecord>;

    /// Patches the supplied fields of a row and returns the updated row.
    /// Fails if no row exists with the given id.
    async fn update(&self, data: &UpdateUser) -> CampusResult<UserRecord>;

    /// Counts the rows matching `filter`.
    async fn count(&self, filter: &UserFilter) -> CampusResult<u64>;

    /// Fetches the rows matching `filter`, ordered by id, bounded by
    /// `limit` and `offset`.
    async fn find_many(
        &self,
        filter: &UserFilter,
        limit: u32,
        offset: u64,
    ) -> CampusResult<Vec<UserRecord>>;
}
