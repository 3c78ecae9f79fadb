use std::sync::Arc;

use crate::application::{place_service::PlaceService, user_service::UserService};

#[derive(Clone)]
pub struct AppState {
    pub place_service: Arc<PlaceService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(place_service: Arc<PlaceService>, user_service: Arc<UserService>) -> Self {
        Self {
            place_service,
            user_service,
        }
    }
}
