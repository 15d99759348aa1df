use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::domain::value_objects::PostId;

#[derive(Default)]
pub struct PostRepositoryStub {
    pub posts: Arc<Mutex<HashMap<PostId, Post>>>,
    /// Erreur renvoyée par n'importe quelle méthode
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Erreur renvoyée uniquement par `create`
    pub create_error: Arc<Mutex<Option<DomainError>>>,
}

impl PostRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_post(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id(), post);
    }

    pub fn count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostRepositoryStub {
    async fn create(&self, post: &Post) -> Result<()> {
        self.check_error()?;
        if let Some(err) = self.create_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.add_post(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>> {
        self.check_error()?;
        Ok(self.posts.lock().unwrap().get(id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>> {
        self.check_error()?;
        let mut posts: Vec<Post> = self.posts.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn delete(&self, id: &PostId) -> Result<()> {
        self.check_error()?;
        self.posts.lock().unwrap().remove(id);
        Ok(())
    }
}
