// crates/account/src/infrastructure/identity_toolkit/identity_toolkit_config.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use std::time::Duration;

pub const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";

#[derive(Debug, Clone)]
pub struct IdentityToolkitConfig {
    /// Racine de l'API (ou de l'émulateur local)
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl IdentityToolkitConfig {
    pub fn from_env() -> AppResult<Self> {
        let api_key = std::env::var("IDENTITY_API_KEY")
            .map_err(|_| AppError::new(ErrorCode::InternalError, "IDENTITY_API_KEY must be set"))?;

        let base_url = std::env::var("IDENTITY_TOOLKIT_URL")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_TOOLKIT_URL.to_string());

        let timeout_secs = std::env::var("IDENTITY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}?key={}", self.base_url, method, self.api_key)
    }
}
