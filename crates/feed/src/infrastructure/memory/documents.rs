// crates/feed/src/infrastructure/memory/documents.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::Result;

use crate::domain::entities::{Author, Comment, Media, Post};
use crate::domain::value_objects::{AuthorId, MediaType, ObjectPath, PostContent, PostId};

pub const POSTS: &str = "posts";

/// Forme du document `posts/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(rename = "authorPhotoURL")]
    pub author_photo_url: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(rename = "mediaURL", default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_object_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

impl From<&Post> for PostDocument {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            author_id: post.author().id().to_string(),
            author_name: post.author().name().to_string(),
            author_photo_url: post.author().avatar_url().to_string(),
            content: post.content().to_string(),
            timestamp: post.created_at(),
            likes: post.likes().iter().map(|l| l.to_string()).collect(),
            comments: post.comments().to_vec(),
            media_url: post.media().map(|m| m.url().to_string()),
            media_object_path: post.media().map(|m| m.object_path().to_string()),
            media_type: post.media().and_then(|m| m.media_type()),
        }
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = shared_kernel::errors::DomainError;

    fn try_from(doc: PostDocument) -> Result<Self> {
        let media = match (doc.media_url, doc.media_object_path) {
            (Some(url), Some(path)) => Some(Media::new(url, ObjectPath::from_raw(path), doc.media_type)),
            _ => None,
        };

        Ok(Post::restore(
            PostId::try_new(doc.id)?,
            Author::new(AuthorId::from_raw(doc.author_id), doc.author_name, Some(doc.author_photo_url)),
            PostContent::from_raw(doc.content),
            media,
            doc.likes.into_iter().map(AuthorId::from_raw).collect(),
            doc.comments,
            doc.timestamp,
        ))
    }
}
