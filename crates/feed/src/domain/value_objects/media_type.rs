// crates/feed/src/domain/value_objects/media_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use shared_kernel::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Déduit du préfixe MIME ; tout autre type reste sans catégorie
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let mime = content_type.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(DomainError::Validation {
                field: "media_type",
                reason: format!("Unknown media type '{}'", other),
            }),
        }
    }
}
