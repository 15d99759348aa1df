// crates/shared-kernel/src/errors/error_code.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    AlreadyExists,
    HandleTaken,
    ConcurrencyConflict,
    Unauthorized,
    Forbidden,
    AccountSetupFailed,
    InternalError,
    InfrastructureFailure,
    ServiceUnavailable,
}
