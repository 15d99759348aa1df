// crates/feed/src/domain/value_objects/post_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// UUID v7 : l'ordre des ids suit l'ordre de création
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        Self::from_str(&id.into())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl ValueObject for PostId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "post_id",
                reason: "Post ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PostId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let id = Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "post_id",
                reason: format!("'{}' is not a valid UUID for a post", s),
            })?;
        id.validate()?;
        Ok(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
