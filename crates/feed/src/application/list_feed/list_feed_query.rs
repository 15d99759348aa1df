// crates/feed/src/application/list_feed/list_feed_query.rs

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFeedQuery {
    pub limit: Option<usize>,
}
