use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity owning zero or more places. `places` holds owned place
/// ids in creation order and is only ever mutated through the transaction
/// manager, never written directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub places: Vec<Uuid>,
}
