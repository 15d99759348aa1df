// backend/services/account-api/src/lib.rs

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use config::ApiConfig;
pub use routes::router;
pub use state::AppState;
