// crates/feed/src/domain/ports/media_storage.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::value_objects::ObjectPath;

/// Stockage objet des pièces jointes
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Dépose l'objet et renvoie son URL publique de téléchargement
    async fn upload(&self, path: &ObjectPath, content_type: &str, bytes: Vec<u8>) -> Result<String>;

    /// `NotFound` si l'objet n'existe pas
    async fn delete(&self, path: &ObjectPath) -> Result<()>;
}
