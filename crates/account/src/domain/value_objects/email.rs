// crates/account/src/domain/value_objects/email.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Regex RFC 5322 simplifiée
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 254;

    /// Constructeur sécurisé (API / Inscription)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // NFC + Lowercase + Trim
        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let email = Self(normalized);
        email.validate()?;

        Ok(email)
    }

    /// Reconstruction (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        let len = self.0.len();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "email",
                reason: format!("Email length must be between 1 and {} chars", Self::MAX_LEN),
            });
        }

        if !EMAIL_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "email",
                reason: "Invalid email format".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Email {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
