// crates/feed/src/infrastructure/memory/memory_media_storage.rs

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::MediaStorage;
use crate::domain::value_objects::ObjectPath;

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct Faults {
    upload: Option<DomainError>,
    delete: Option<DomainError>,
}

/// Stockage objet en mémoire ; les URLs sont servies sous `public_base_url`
pub struct MemoryMediaStorage {
    public_base_url: String,
    objects: RwLock<HashMap<ObjectPath, StoredObject>>,
    faults: RwLock<Faults>,
}

impl MemoryMediaStorage {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
            faults: RwLock::new(Faults::default()),
        }
    }

    pub async fn get(&self, path: &ObjectPath) -> Option<StoredObject> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn count(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Le prochain `upload` échouera avec `error`
    pub async fn fail_next_upload(&self, error: DomainError) {
        self.faults.write().await.upload = Some(error);
    }

    /// Le prochain `delete` échouera avec `error`
    pub async fn fail_next_delete(&self, error: DomainError) {
        self.faults.write().await.delete = Some(error);
    }
}

#[async_trait]
impl MediaStorage for MemoryMediaStorage {
    async fn upload(&self, path: &ObjectPath, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        if let Some(err) = self.faults.write().await.upload.take() {
            return Err(err);
        }

        self.objects.write().await.insert(
            path.clone(),
            StoredObject { content_type: content_type.to_string(), bytes },
        );

        Ok(format!("{}/{}", self.public_base_url, path))
    }

    async fn delete(&self, path: &ObjectPath) -> Result<()> {
        if let Some(err) = self.faults.write().await.delete.take() {
            return Err(err);
        }

        self.objects
            .write()
            .await
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound {
                entity: "MediaObject",
                id: path.to_string(),
            })
    }
}
