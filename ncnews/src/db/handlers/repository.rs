//! Base repository traits for database operations.

/// Contains the Repository traits.
///
/// A repository is a data access layer for one postgres table. It borrows a connection
/// (or transaction) for its lifetime and issues one parameterized statement per method.
use crate::db::errors::Result;

/// Read and insert operations shared by every table.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest: Sync;

    /// The response/DTO type returned by operations
    type Response: Send;

    /// The identifier type for lookups
    type Id: Send + Sync + 'static;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// Whether an entity with this ID exists.
    ///
    /// Repositories whose responses carry derived columns should override this with a
    /// cheaper query.
    async fn exists(&mut self, id: Self::Id) -> Result<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    /// List entities matching a filter
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;
}

/// Operations for entities that can be voted on and deleted (articles and comments).
#[async_trait::async_trait]
pub trait MutableRepository: Repository {
    /// The request type for updating entities
    type UpdateRequest: Sync;

    /// Apply an update, returning `None` if no entity has this ID
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>>;

    /// Delete an entity by ID, returning whether a row was removed
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
