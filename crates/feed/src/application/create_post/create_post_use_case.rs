// crates/feed/src/application/create_post/create_post_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::create_post::CreatePostCommand;
use crate::domain::entities::{Media, Post};
use crate::domain::ports::MediaStorage;
use crate::domain::repositories::PostRepository;
use crate::domain::value_objects::{MediaType, ObjectPath, PostId};

pub struct CreatePostUseCase {
    post_repo: Arc<dyn PostRepository>,
    media_storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
}

impl CreatePostUseCase {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        media_storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { post_repo, media_storage, clock }
    }

    pub async fn execute(&self, cmd: CreatePostCommand) -> Result<Post> {
        // 1. Rien à publier : rejet avant tout upload
        Post::ensure_not_empty(&cmd.content, cmd.attachment.is_some())?;

        let now = self.clock.now();

        // 2. Upload de la pièce jointe
        let media = match cmd.attachment {
            Some(attachment) => {
                let path = ObjectPath::for_attachment(
                    cmd.author.id(),
                    now.timestamp_millis(),
                    &attachment.file_name,
                );
                let media_type = MediaType::from_mime(&attachment.content_type);
                let url = self
                    .media_storage
                    .upload(&path, &attachment.content_type, attachment.bytes)
                    .await?;

                tracing::debug!(path = %path, media_type = ?media_type, "Attachment uploaded");
                Some(Media::new(url, path, media_type))
            }
            None => None,
        };

        // 3. Écriture du document
        let post = Post::publish(PostId::new(), cmd.author, cmd.content, media, now)?;

        if let Err(e) = self.post_repo.create(&post).await {
            if let Some(media) = post.media() {
                self.discard_upload(media.object_path()).await;
            }
            return Err(e);
        }

        tracing::info!(post_id = %post.id(), author_id = %post.author().id(), "📝 Post published");
        Ok(post)
    }

    /// L'objet orphelin est supprimé au mieux
    async fn discard_upload(&self, path: &ObjectPath) {
        if let Err(e) = self.media_storage.delete(path).await {
            tracing::warn!(path = %path, error = %e, "⚠️ Could not remove attachment of unpublished post");
        }
    }
}
