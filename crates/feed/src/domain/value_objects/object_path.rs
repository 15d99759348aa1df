// crates/feed/src/domain/value_objects/object_path.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::value_objects::{AuthorId, FileName};

/// Chemin d'un objet dans le stockage média
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// `posts/{uid}/{millis}_{file}`
    pub fn for_attachment(author: &AuthorId, uploaded_at_millis: i64, file_name: &FileName) -> Self {
        Self(format!("posts/{}/{}_{}", author, uploaded_at_millis, file_name))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
