// crates/feed/src/application/create_post/create_post_command.rs

use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Author;
use crate::domain::value_objects::{FileName, PostContent};

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub author: Author,
    pub content: PostContent,
    pub attachment: Option<Attachment>,
}

/// Fichier joint tel que reçu du client
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: FileName,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub const MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn try_new(file_name: FileName, content_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(DomainError::Validation {
                field: "attachment",
                reason: "Attachment is empty".into(),
            });
        }

        if bytes.len() > Self::MAX_BYTES {
            return Err(DomainError::Validation {
                field: "attachment",
                reason: format!("Attachment too large (max {} bytes)", Self::MAX_BYTES),
            });
        }

        Ok(Self {
            file_name,
            content_type: content_type.into().trim().to_string(),
            bytes,
        })
    }
}
