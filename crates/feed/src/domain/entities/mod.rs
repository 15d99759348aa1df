// crates/feed/src/domain/entities/mod.rs

mod author;
mod comment;
mod media;
mod post;

#[cfg(test)]
mod tests;

pub use author::Author;
pub use comment::Comment;
pub use media::Media;
pub use post::Post;
