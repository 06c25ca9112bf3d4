//! Core traits for the data-access layer.

use crate::{CampusResult, SearchPage};
use async_trait::async_trait;

/// Generic repository contract for CRUD and paginated search.
///
/// Parameterized over the key type, the entity, and the create, update
/// and criteria DTO types. There is exactly one implementation per
/// entity; the trait exists as the explicit seam between callers and
/// the persistence adapter.
#[async_trait]
pub trait Repository<Id, E, NewE, UpdateE, Criteria>: Send + Sync
where
    Id: Send + Sync,
    E: Send + Sync,
    NewE: Send + Sync,
    UpdateE: Send + Sync,
    Criteria: Send + Sync,
{
    /// Creates a new entity and returns it, including the generated id.
    async fn add(&self, data: NewE) -> CampusResult<E>;

    /// Fetches an entity by id. A missing entity is `Ok(None)`, not an error.
    async fn get(&self, id: Id) -> CampusResult<Option<E>>;

    /// Deletes an entity by id and returns its prior state.
    async fn delete(&self, id: Id) -> CampusResult<E>;

    /// Patches the fields supplied in `data` and returns the updated entity.
    async fn update(&self, data: UpdateE) -> CampusResult<E>;

    /// Returns one page of entities matching `criteria` (1-based page).
    async fn get_by(&self, criteria: Criteria, page: u32) -> CampusResult<SearchPage<E, Criteria>>;
}

/// Trait for entities with a unique identifier.
pub trait Entity<Id> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &Id;
}
