// crates/feed/src/application/delete_post/delete_post_command.rs

use crate::domain::value_objects::{AuthorId, PostId};

#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    /// Compte de la session courante
    pub requester: AuthorId,
    pub post_id: PostId,
}
