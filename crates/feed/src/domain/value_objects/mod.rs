// crates/feed/src/domain/value_objects/mod.rs

mod author_id;
mod file_name;
mod media_type;
mod object_path;
mod post_content;
mod post_id;

#[cfg(test)]
mod tests;

pub use author_id::AuthorId;
pub use file_name::FileName;
pub use media_type::MediaType;
pub use object_path::ObjectPath;
pub use post_content::PostContent;
pub use post_id::PostId;
