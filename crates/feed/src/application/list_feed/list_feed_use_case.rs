// crates/feed/src/application/list_feed/list_feed_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::list_feed::ListFeedQuery;
use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;

pub struct ListFeedUseCase {
    post_repo: Arc<dyn PostRepository>,
}

impl ListFeedUseCase {
    pub const DEFAULT_LIMIT: usize = 50;
    pub const MAX_LIMIT: usize = 200;

    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, query: ListFeedQuery) -> Result<Vec<Post>> {
        let limit = query
            .limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);

        self.post_repo.list_recent(limit).await
    }
}
