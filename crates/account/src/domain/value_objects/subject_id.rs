// crates/account/src/domain/value_objects/subject_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Identifiant opaque attribué par le fournisseur d'identité.
/// Clé des documents `users/{subject_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    pub const MAX_LENGTH: usize = 128;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let id = Self(value.into());
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

impl ValueObject for SubjectId {
    fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "subject_id",
                reason: "Subject id cannot be empty".into(),
            });
        }

        if self.0.len() > Self::MAX_LENGTH || self.0.contains('/') {
            return Err(DomainError::Validation {
                field: "subject_id",
                reason: "Subject id is not a valid document key".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for SubjectId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<SubjectId> for String {
    fn from(id: SubjectId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
