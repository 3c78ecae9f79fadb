use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A user-owned location record. `creator` always references an existing
/// user whose `places` vector carries this place's id; both sides are
/// written in one transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub address: String,
    pub location: GeoPoint,
    pub creator: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
}
