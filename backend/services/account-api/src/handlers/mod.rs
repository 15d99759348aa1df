// backend/services/account-api/src/handlers/mod.rs

pub mod accounts;
pub mod media;
pub mod posts;
pub mod profiles;
pub mod sessions;
