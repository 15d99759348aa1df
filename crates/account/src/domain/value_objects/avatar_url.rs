// crates/account/src/domain/value_objects/avatar_url.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::DisplayName;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarUrl(String);

impl AvatarUrl {
    pub const MAX_LENGTH: usize = 2048;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let url = Self(value.into().trim().to_string());
        url.validate()?;
        Ok(url)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Avatar généré attribué à l'inscription
    pub fn placeholder_for(name: &DisplayName) -> Self {
        let initial = name.initial().to_string();
        Self(format!("https://placehold.co/100x100.png?text={}", urlencoding::encode(&initial)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AvatarUrl {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() || self.0.len() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "avatar_url",
                reason: format!("Avatar URL length must be between 1 and {}", Self::MAX_LENGTH),
            });
        }

        if !(self.0.starts_with("https://") || self.0.starts_with("http://")) {
            return Err(DomainError::Validation {
                field: "avatar_url",
                reason: "Avatar URL must be an http(s) URL".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for AvatarUrl {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<AvatarUrl> for String {
    fn from(url: AvatarUrl) -> Self {
        url.0
    }
}

impl std::fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
