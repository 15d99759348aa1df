// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_factory.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 2;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            min_connections: Self::DEFAULT_MIN_CONNECTIONS,
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// `DATABASE_URL` obligatoire, le reste a des valeurs par défaut
    pub fn from_env() -> AppResult<Self> {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::new(ErrorCode::InternalError, "DATABASE_URL must be set"))?;

        Ok(Self {
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS),
            min_connections: env_or("DATABASE_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS),
            connect_timeout: Duration::from_secs(env_or(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            ..Self::new(url)
        })
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = self.min_connections.min(max_connections);
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

pub async fn create_postgres_pool(config: &DbConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::new(
                ErrorCode::InfrastructureFailure,
                format!("Failed to connect to Postgres: {}", e),
            )
        })?;

    tracing::info!(max_connections = config.max_connections, "🐘 Postgres pool ready");
    Ok(pool)
}
