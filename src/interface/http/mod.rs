pub mod api_error;
pub mod places_handler;
pub mod users_handler;
