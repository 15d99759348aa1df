// backend/services/account-api/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use account::errors::RegistrationError;
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// `AppError` sérialisé en JSON, statut HTTP dérivé de son code
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists | ErrorCode::HandleTaken | ErrorCode::ConcurrencyConflict => {
                StatusCode::CONFLICT
            }
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::AccountSetupFailed
            | ErrorCode::InternalError
            | ErrorCode::InfrastructureFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = ?self.0.code, message = %self.0.message, "❌ Request failed");
        }
        (status, Json(self.0)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        if error.is_technical() {
            tracing::error!(error = %error, "Technical failure behind masked response");
        }
        Self(error.into())
    }
}

impl From<RegistrationError> for ApiError {
    fn from(error: RegistrationError) -> Self {
        Self(error.into())
    }
}
