// crates/feed/src/domain/entities/post.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Author, Comment, Media};
use crate::domain::value_objects::{AuthorId, PostContent, PostId};

/// Publication du fil, document `posts/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub(crate) id: PostId,
    pub(crate) author: Author,
    pub(crate) content: PostContent,
    pub(crate) media: Option<Media>,
    pub(crate) likes: Vec<AuthorId>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) created_at: DateTime<Utc>,
}

impl Post {
    /// Nouvelle publication : sans likes ni commentaires
    pub fn publish(
        id: PostId,
        author: Author,
        content: PostContent,
        media: Option<Media>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        Self::ensure_not_empty(&content, media.is_some())?;

        Ok(Self {
            id,
            author,
            content,
            media,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at,
        })
    }

    /// Reconstruction depuis le stockage, sans validation
    pub fn restore(
        id: PostId,
        author: Author,
        content: PostContent,
        media: Option<Media>,
        likes: Vec<AuthorId>,
        comments: Vec<Comment>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, author, content, media, likes, comments, created_at }
    }

    /// Une publication porte du texte, un média, ou les deux
    pub fn ensure_not_empty(content: &PostContent, has_media: bool) -> Result<()> {
        if content.is_blank() && !has_media {
            return Err(DomainError::Validation {
                field: "content",
                reason: "A post needs text or an attachment".into(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &PostContent {
        &self.content
    }

    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    pub fn likes(&self) -> &[AuthorId] {
        &self.likes
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_authored_by(&self, author_id: &AuthorId) -> bool {
        self.author.id() == author_id
    }
}

impl EntityMetadata for Post {
    fn entity_name() -> &'static str {
        "Post"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "posts_pkey" => "id",
            _ => "unique_constraint",
        }
    }
}
