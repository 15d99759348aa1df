// crates/feed/src/infrastructure/postgres/rows/postgres_post_row.rs

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Author, Comment, Media, Post};
use crate::domain::value_objects::{AuthorId, MediaType, ObjectPath, PostContent, PostId};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresPostRow {
    pub id: Uuid,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: String,
    pub content: String,
    pub media_url: Option<String>,
    pub media_object_path: Option<String>,
    pub media_type: Option<String>,
    pub likes: Vec<String>,
    pub comments: Json<Vec<Comment>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostgresPostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostgresPostRow) -> Result<Self> {
        let media_type = row
            .media_type
            .as_deref()
            .map(str::parse::<MediaType>)
            .transpose()?;

        let media = match (row.media_url, row.media_object_path) {
            (Some(url), Some(path)) => Some(Media::new(url, ObjectPath::from_raw(path), media_type)),
            _ => None,
        };

        Ok(Post::restore(
            PostId::from_uuid(row.id),
            Author::new(AuthorId::from_raw(row.author_id), row.author_name, Some(row.author_avatar_url)),
            PostContent::from_raw(row.content),
            media,
            row.likes.into_iter().map(AuthorId::from_raw).collect(),
            row.comments.0,
            row.created_at,
        ))
    }
}

impl From<&Post> for PostgresPostRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().as_uuid(),
            author_id: post.author().id().to_string(),
            author_name: post.author().name().to_string(),
            author_avatar_url: post.author().avatar_url().to_string(),
            content: post.content().to_string(),
            media_url: post.media().map(|m| m.url().to_string()),
            media_object_path: post.media().map(|m| m.object_path().to_string()),
            media_type: post.media().and_then(|m| m.media_type()).map(|t| t.as_str().to_string()),
            likes: post.likes().iter().map(|l| l.to_string()).collect(),
            comments: Json(post.comments().to_vec()),
            created_at: post.created_at(),
        }
    }
}
