// crates/account/src/domain/value_objects/handle.rs

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Pseudo public unique. Toujours stocké sous forme normalisée
/// (NFC + minuscules) : "Alice" et "alice" désignent la même réservation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    pub const MAX_LEN: usize = 30;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let handle = Self(normalized);
        handle.validate()?;
        Ok(handle)
    }

    /// Reconstruction depuis le stockage (déjà normalisé)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Handle {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DomainError::Validation {
                field: "handle",
                reason: "Handle cannot be empty".into(),
            });
        }

        if self.0.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "handle",
                reason: format!("Handle too long (max {})", Self::MAX_LEN),
            });
        }

        // Sert de clé de document : ni séparateur de chemin ni espace
        if self.0.chars().any(|c| c == '/' || c.is_whitespace() || c.is_control()) {
            return Err(DomainError::Validation {
                field: "handle",
                reason: "Handle cannot contain '/', whitespace or control characters".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for Handle {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
