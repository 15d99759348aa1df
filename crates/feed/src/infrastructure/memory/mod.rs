// crates/feed/src/infrastructure/memory/mod.rs

mod documents;
mod memory_media_storage;
mod memory_post_repository;

pub use memory_media_storage::{MemoryMediaStorage, StoredObject};
pub use memory_post_repository::MemoryPostRepository;
