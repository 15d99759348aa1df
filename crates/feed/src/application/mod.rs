// crates/feed/src/application/mod.rs

pub mod create_post;
pub mod delete_post;
pub mod list_feed;
