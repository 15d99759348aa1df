// crates/feed/src/domain/entities/media.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{MediaType, ObjectPath};

/// Pièce jointe stockée : l'URL publique et le chemin interne nécessaire à la suppression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    url: String,
    object_path: ObjectPath,
    media_type: Option<MediaType>,
}

impl Media {
    pub fn new(url: impl Into<String>, object_path: ObjectPath, media_type: Option<MediaType>) -> Self {
        Self { url: url.into(), object_path, media_type }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn object_path(&self) -> &ObjectPath {
        &self.object_path
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }
}
