// crates/feed/src/domain/repositories/post_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Post;
use crate::domain::value_objects::PostId;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &Post) -> Result<()>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>>;

    /// Publications les plus récentes d'abord (`created_at` décroissant)
    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>>;

    async fn delete(&self, id: &PostId) -> Result<()>;
}
