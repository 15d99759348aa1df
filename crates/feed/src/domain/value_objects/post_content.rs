// crates/feed/src/domain/value_objects/post_content.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Texte d'une publication. Peut être vide si un média l'accompagne.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct PostContent(String);

impl PostContent {
    pub const MAX_LENGTH: usize = 5000;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let content = Self(value.into().trim().to_string());
        content.validate()?;
        Ok(content)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl ValueObject for PostContent {
    fn validate(&self) -> Result<()> {
        if self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "content",
                reason: format!("Post content too long (max {})", Self::MAX_LENGTH),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostContent {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<PostContent> for String {
    fn from(content: PostContent) -> Self {
        content.0
    }
}
