use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{place::Place, user::User};
use crate::transaction::Change;

pub mod in_memory_store;

pub use in_memory_store::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {0} not found")]
    MissingDocument(Uuid),

    #[error("storage transport error: {0}")]
    Io(String),
}

/// Thin access to the place collection. No business logic here, only
/// translation between storage representation and domain entities.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Place>, StoreError>;
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>, StoreError>;
    async fn save(&self, place: Place) -> Result<Place, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Thin access to the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn save(&self, user: User) -> Result<User, StoreError>;
}

/// The store's transactional seam: apply a buffered change list
/// all-or-nothing. Only the transaction manager calls this.
#[async_trait]
pub trait TransactionalBackend: Send + Sync {
    async fn apply(&self, changes: &[Change]) -> Result<(), StoreError>;
}
