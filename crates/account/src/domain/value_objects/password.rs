// crates/account/src/domain/value_objects/password.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Mot de passe en clair, transmis tel quel au fournisseur d'identité.
/// Jamais sérialisé ni affiché.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Politique minimale du fournisseur
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 4096;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let password = Self(value.into());
        password.validate()?;
        Ok(password)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Password {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();

        if count < Self::MIN_LENGTH {
            return Err(DomainError::Validation {
                field: "password",
                reason: format!("Password must be at least {} characters", Self::MIN_LENGTH),
            });
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "password",
                reason: format!("Password too long (max {})", Self::MAX_LENGTH),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
