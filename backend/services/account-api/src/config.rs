// backend/services/account-api/src/config.rs

use std::net::SocketAddr;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityBackend {
    /// Émulateur en mémoire
    Memory,
    /// API REST `accounts:*` (voir `IdentityToolkitConfig`)
    Toolkit,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub identity: IdentityBackend,
    /// Préfixe des URLs renvoyées pour les pièces jointes
    pub media_public_base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> AppResult<Self> {
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:8080");
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| config_error(format!("BIND_ADDR '{}' is not a socket address", bind_addr)))?;

        let storage = match env_or("STORAGE_BACKEND", "memory").to_ascii_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "postgres" => StorageBackend::Postgres,
            other => return Err(config_error(format!("Unknown STORAGE_BACKEND '{}'", other))),
        };

        let identity = match env_or("IDENTITY_BACKEND", "memory").to_ascii_lowercase().as_str() {
            "memory" => IdentityBackend::Memory,
            "toolkit" => IdentityBackend::Toolkit,
            other => return Err(config_error(format!("Unknown IDENTITY_BACKEND '{}'", other))),
        };

        let media_public_base_url = std::env::var("MEDIA_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://{}/media", bind_addr));

        Ok(Self { bind_addr, storage, identity, media_public_base_url })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn config_error(message: String) -> AppError {
    AppError::new(ErrorCode::InternalError, message)
}
