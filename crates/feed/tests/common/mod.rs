// crates/feed/tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;
use feed::application::create_post::CreatePostUseCase;
use feed::application::delete_post::DeletePostUseCase;
use feed::application::list_feed::ListFeedUseCase;
use feed::domain::entities::Author;
use feed::domain::value_objects::AuthorId;
use feed::infrastructure::memory::{MemoryMediaStorage, MemoryPostRepository};
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::memory::MemoryDocumentStore;

pub struct FeedWorld {
    pub store: Arc<MemoryDocumentStore>,
    pub media: Arc<MemoryMediaStorage>,
    pub create: CreatePostUseCase,
    pub list: ListFeedUseCase,
    pub delete: DeletePostUseCase,
}

impl FeedWorld {
    pub fn new() -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        let media = Arc::new(MemoryMediaStorage::new("http://localhost:8080/media"));
        let posts = Arc::new(MemoryPostRepository::new(store.clone()));

        Self {
            create: CreatePostUseCase::new(posts.clone(), media.clone(), Arc::new(SystemClock)),
            list: ListFeedUseCase::new(posts.clone()),
            delete: DeletePostUseCase::new(posts, media.clone()),
            store,
            media,
        }
    }
}

pub fn author(uid: &str, name: &str) -> Author {
    Author::new(AuthorId::try_new(uid).unwrap(), name, None)
}

#[cfg(feature = "integration")]
pub async fn setup_postgres_test_db() -> (
    sqlx::PgPool,
    testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
) {
    let (pool, container) = shared_kernel::infrastructure::postgres::utils::setup_test_postgres().await;
    feed::infrastructure::postgres::utils::run_postgres_migrations(&pool)
        .await
        .expect("Feed migrations failed");
    (pool, container)
}
