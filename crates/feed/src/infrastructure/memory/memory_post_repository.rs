// crates/feed/src/infrastructure/memory/memory_post_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::memory::{DocumentPath, MemoryDocumentStore};

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::domain::value_objects::PostId;
use crate::infrastructure::memory::documents::{PostDocument, POSTS};

pub struct MemoryPostRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryPostRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        Self { store }
    }

    fn path(id: &PostId) -> DocumentPath {
        DocumentPath::new(POSTS, id.to_string())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &Post) -> Result<()> {
        self.store.set_as(Self::path(&post.id()), &PostDocument::from(post), None)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>> {
        self.store
            .get_as::<PostDocument>(&Self::path(id), None)?
            .map(Post::try_from)
            .transpose()
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>> {
        let mut docs = self.store.list_as::<PostDocument>(POSTS)?;
        docs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        docs.into_iter()
            .take(limit)
            .map(Post::try_from)
            .collect()
    }

    async fn delete(&self, id: &PostId) -> Result<()> {
        self.store.delete(Self::path(id), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;
    use crate::domain::entities::{Author, Media};
    use crate::domain::value_objects::{AuthorId, MediaType, ObjectPath, PostContent};

    fn post(content: &str, minutes: i64, media: Option<Media>) -> Post {
        Post::publish(
            PostId::new(),
            Author::new(AuthorId::try_new("uid-1").unwrap(), "Ann", None),
            PostContent::try_new(content).unwrap(),
            media,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_document_shape() {
        let store = Arc::new(MemoryDocumentStore::new());
        let repo = MemoryPostRepository::new(store.clone());
        let media = Media::new(
            "https://media.test/posts/uid-1/1_a.mp4",
            ObjectPath::from_raw("posts/uid-1/1_a.mp4"),
            Some(MediaType::Video),
        );
        let p = post("hi", 0, Some(media));

        repo.create(&p).await.unwrap();

        let doc = store.get(&DocumentPath::new(POSTS, p.id().to_string()), None).unwrap().unwrap();
        assert_eq!(doc["authorId"], "uid-1");
        assert_eq!(doc["authorPhotoURL"], "https://placehold.co/40x40/FF69B4/FFFFFF?text=A");
        assert_eq!(doc["mediaURL"], "https://media.test/posts/uid-1/1_a.mp4");
        assert_eq!(doc["mediaType"], "video");
        assert_eq!(doc["likes"], json!([]));
        assert_eq!(doc["comments"], json!([]));

        assert_eq!(repo.find_by_id(&p.id()).await.unwrap(), Some(p));
    }

    #[tokio::test]
    async fn test_list_recent_orders_by_timestamp() {
        let repo = MemoryPostRepository::new(Arc::new(MemoryDocumentStore::new()));
        for (content, minutes) in [("old", 0), ("newest", 20), ("middle", 10)] {
            repo.create(&post(content, minutes, None)).await.unwrap();
        }

        let posts = repo.list_recent(2).await.unwrap();

        let contents: Vec<&str> = posts.iter().map(|p| p.content().as_str()).collect();
        assert_eq!(contents, vec!["newest", "middle"]);
    }
}
