pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod state;
pub mod transaction;

pub use app::build_router;
