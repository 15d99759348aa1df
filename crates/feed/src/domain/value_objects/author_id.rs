// crates/feed/src/domain/value_objects/author_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Identifiant opaque du compte auteur (subject id du fournisseur d'identité)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorId(String);

impl AuthorId {
    pub const MAX_LENGTH: usize = 128;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let id = Self(value.into().trim().to_string());
        id.validate()?;
        Ok(id)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AuthorId {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() || self.0.len() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "author_id",
                reason: format!("Author id must be 1..={} characters", Self::MAX_LENGTH),
            });
        }
        // Segment de chemin de stockage
        if self.0.contains('/') {
            return Err(DomainError::Validation {
                field: "author_id",
                reason: "Author id cannot contain '/'".into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AuthorId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}
