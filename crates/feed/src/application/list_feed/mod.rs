mod list_feed_query;
mod list_feed_use_case;

pub use list_feed_query::ListFeedQuery;
pub use list_feed_use_case::ListFeedUseCase;
