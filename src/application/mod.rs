pub mod dto;
pub mod geocode;
pub mod place_service;
pub mod user_service;
