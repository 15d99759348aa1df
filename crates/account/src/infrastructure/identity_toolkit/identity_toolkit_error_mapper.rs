// crates/account/src/infrastructure/identity_toolkit/identity_toolkit_error_mapper.rs

use shared_kernel::errors::DomainError;

/// Traduit un code d'erreur du fournisseur (`EMAIL_EXISTS`,
/// `WEAK_PASSWORD : Password should be ...`) en erreur de domaine
pub fn map_provider_error(message: &str, email: Option<&str>) -> DomainError {
    let code = message.split(':').next().unwrap_or(message).trim();

    match code {
        "EMAIL_EXISTS" => DomainError::AlreadyExists {
            entity: "Identity",
            field: "email",
            value: email.unwrap_or_default().to_string(),
        },
        c if c.starts_with("WEAK_PASSWORD") => DomainError::Validation {
            field: "password",
            reason: message.to_string(),
        },
        "INVALID_EMAIL" => DomainError::Validation {
            field: "email",
            reason: "Invalid email format".into(),
        },
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "EMAIL_NOT_FOUND" | "USER_DISABLED" => {
            DomainError::Unauthorized {
                reason: "Invalid email or password".into(),
            }
        }
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => DomainError::Unauthorized {
            reason: "Identity token is no longer valid, please sign in again".into(),
        },
        "USER_NOT_FOUND" => DomainError::NotFound {
            entity: "Identity",
            id: "unknown".into(),
        },
        _ => DomainError::Infrastructure(format!("Identity provider error: {}", message)),
    }
}
