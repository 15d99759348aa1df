// crates/feed/src/domain/entities/author.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::AuthorId;

/// Auteur dénormalisé dans chaque publication, figé au moment de l'écriture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    avatar_url: String,
}

impl Author {
    pub const ANONYMOUS_NAME: &'static str = "Anonymous";

    /// Sans avatar, un placeholder est généré à partir de l'initiale du nom
    pub fn new(id: AuthorId, name: impl Into<String>, avatar_url: Option<String>) -> Self {
        let name = name.into().trim().to_string();
        let name = if name.is_empty() { Self::ANONYMOUS_NAME.to_string() } else { name };

        let avatar_url = avatar_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::placeholder_avatar(&name));

        Self { id, name, avatar_url }
    }

    pub fn placeholder_avatar(name: &str) -> String {
        let initial = name.chars().next().unwrap_or('?').to_string();
        format!("https://placehold.co/40x40/FF69B4/FFFFFF?text={}", urlencoding::encode(&initial))
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}
