// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Conflit d'unicité (409) - ex: email déjà utilisé
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::AlreadyExists,
                format!("{entity} with {field} '{value}' already exists"),
            ),

            // 3. Concurrence (409)
            DomainError::ConcurrencyConflict { reason } => {
                Self::new(ErrorCode::ConcurrencyConflict, reason)
            }

            // 4. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 5. Identité non valide (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 6. Droits insuffisants (403)
            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // 7. Erreurs techniques (500) : le détail reste côté logs
            DomainError::Infrastructure(_)
            | DomainError::Internal(_)
            | DomainError::TooManyConflicts(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = ?err, "Database infrastructure error");

        Self::new(ErrorCode::InternalError, "A database error occurred")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_field_details() {
        let app: AppError = DomainError::Validation {
            field: "handle",
            reason: "Handle cannot be empty".into(),
        }
        .into();

        assert_eq!(app.code, ErrorCode::ValidationFailed);
        let details = app.details.expect("details");
        assert_eq!(details["field"], "handle");
    }

    #[test]
    fn test_infrastructure_error_is_masked() {
        let app: AppError = DomainError::Infrastructure("connection reset by peer".into()).into();

        assert_eq!(app.code, ErrorCode::InternalError);
        assert!(!app.message.contains("connection reset"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let app = AppError::new(ErrorCode::HandleTaken, "taken");
        let json = serde_json::to_value(&app).unwrap();

        assert_eq!(json["code"], "HANDLE_TAKEN");
        assert!(json.get("details").is_none());
    }
}
