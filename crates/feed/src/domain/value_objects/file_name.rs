// crates/feed/src/domain/value_objects/file_name.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Nom de fichier fourni par le client, utilisé tel quel dans le chemin de stockage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName(String);

impl FileName {
    pub const MAX_LENGTH: usize = 255;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let name = Self(value.into().trim().to_string());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for FileName {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() || self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "file_name",
                reason: format!("File name must be 1..={} characters", Self::MAX_LENGTH),
            });
        }

        if self.0 == "." || self.0 == ".." {
            return Err(DomainError::Validation {
                field: "file_name",
                reason: "File name cannot be a relative path".into(),
            });
        }

        if self.0.chars().any(|c| c == '/' || c == '\\' || c.is_control()) {
            return Err(DomainError::Validation {
                field: "file_name",
                reason: "File name cannot contain path separators or control characters".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
