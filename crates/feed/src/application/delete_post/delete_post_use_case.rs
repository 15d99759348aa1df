// crates/feed/src/application/delete_post/delete_post_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::{DomainError, Result};

use crate::application::delete_post::DeletePostCommand;
use crate::domain::ports::MediaStorage;
use crate::domain::repositories::PostRepository;

pub struct DeletePostUseCase {
    post_repo: Arc<dyn PostRepository>,
    media_storage: Arc<dyn MediaStorage>,
}

impl DeletePostUseCase {
    pub fn new(post_repo: Arc<dyn PostRepository>, media_storage: Arc<dyn MediaStorage>) -> Self {
        Self { post_repo, media_storage }
    }

    pub async fn execute(&self, cmd: DeletePostCommand) -> Result<()> {
        let post = self
            .post_repo
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or_not_found(cmd.post_id)?;

        if !post.is_authored_by(&cmd.requester) {
            return Err(DomainError::Forbidden {
                reason: "Only the author can delete this post".into(),
            });
        }

        // 1. Le document d'abord : la publication disparaît du fil même si le média résiste
        self.post_repo.delete(&cmd.post_id).await?;

        // 2. Puis l'objet média
        if let Some(media) = post.media() {
            match self.media_storage.delete(media.object_path()).await {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {
                    tracing::warn!(path = %media.object_path(), "⚠️ Media object already gone, post deleted anyway");
                }
                Err(e) => {
                    tracing::error!(
                        post_id = %cmd.post_id,
                        path = %media.object_path(),
                        error = %e,
                        "❌ Post deleted but its media object could not be removed"
                    );
                    return Err(e);
                }
            }
        }

        tracing::info!(post_id = %cmd.post_id, "🗑️ Post deleted");
        Ok(())
    }
}
