use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::MediaStorage;
use crate::domain::value_objects::ObjectPath;

#[derive(Default)]
pub struct MediaStorageStub {
    /// chemin -> type MIME
    pub objects: Arc<Mutex<HashMap<ObjectPath, String>>>,
    pub deleted: Arc<Mutex<Vec<ObjectPath>>>,
    pub upload_error: Arc<Mutex<Option<DomainError>>>,
    pub delete_error: Arc<Mutex<Option<DomainError>>>,
}

impl MediaStorageStub {
    pub const BASE_URL: &'static str = "https://media.test";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&self, path: ObjectPath, content_type: &str) {
        self.objects.lock().unwrap().insert(path, content_type.to_string());
    }

    pub fn count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStorage for MediaStorageStub {
    async fn upload(&self, path: &ObjectPath, content_type: &str, _bytes: Vec<u8>) -> Result<String> {
        if let Some(err) = self.upload_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.add_object(path.clone(), content_type);
        Ok(format!("{}/{}", Self::BASE_URL, path))
    }

    async fn delete(&self, path: &ObjectPath) -> Result<()> {
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.deleted.lock().unwrap().push(path.clone());
        match self.objects.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound { entity: "MediaObject", id: path.to_string() }),
        }
    }
}
