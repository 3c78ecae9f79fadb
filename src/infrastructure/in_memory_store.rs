use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PlaceRepository, StoreError, TransactionalBackend, UserRepository};
use crate::domain::{place::Place, user::User};
use crate::transaction::Change;

#[derive(Debug, Clone, Default)]
struct StoreInner {
    places: HashMap<Uuid, Place>,
    users: HashMap<Uuid, User>,
}

impl StoreInner {
    fn apply_change(&mut self, change: &Change) -> Result<(), StoreError> {
        match change {
            Change::PutPlace(place) => {
                self.places.insert(place.id, place.clone());
                Ok(())
            }
            Change::RemovePlace(id) => {
                self.places.remove(id);
                Ok(())
            }
            Change::PutUser(user) => {
                self.users.insert(user.id, user.clone());
                Ok(())
            }
            Change::LinkPlace { owner_id, place_id } => {
                let owner = self
                    .users
                    .get_mut(owner_id)
                    .ok_or(StoreError::MissingDocument(*owner_id))?;
                if !owner.places.contains(place_id) {
                    owner.places.push(*place_id);
                }
                Ok(())
            }
            Change::UnlinkPlace { owner_id, place_id } => {
                // The owner may have vanished between lookup and commit;
                // unlinking is best-effort within the unit.
                if let Some(owner) = self.users.get_mut(owner_id) {
                    owner.places.retain(|id| id != place_id);
                }
                Ok(())
            }
        }
    }
}

/// Both entity collections behind one lock.
///
/// Readers take the read guard and always see the last committed state;
/// `apply` stages the whole change list on a copy and swaps it in under the
/// write guard, so a rejected unit leaves nothing behind and a reader never
/// observes a place without its owner link.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionalBackend for InMemoryStore {
    async fn apply(&self, changes: &[Change]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        let mut staged = inner.clone();
        for change in changes {
            staged.apply_change(change)?;
        }

        *inner = staged;
        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Place>, StoreError> {
        Ok(self.inner.read().await.places.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .places
            .values()
            .filter(|place| place.creator == owner_id)
            .cloned()
            .collect())
    }

    async fn save(&self, place: Place) -> Result<Place, StoreError> {
        self.apply(&[Change::PutPlace(place.clone())]).await?;
        Ok(place)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.apply(&[Change::RemovePlace(id)]).await
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        self.apply(&[Change::PutUser(user.clone())]).await?;
        Ok(user)
    }
}
