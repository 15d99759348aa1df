// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// Result du domaine (agrégats, use cases, ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// Result d'application (API, bootstrap).
pub type AppResult<T> = std::result::Result<T, AppError>;
