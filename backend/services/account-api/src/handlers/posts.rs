// backend/services/account-api/src/handlers/posts.rs

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use account::domain::entities::Session;
use feed::application::create_post::{Attachment, CreatePostCommand};
use feed::application::delete_post::DeletePostCommand;
use feed::application::list_feed::ListFeedQuery;
use feed::domain::entities::Author;
use feed::domain::value_objects::{AuthorId, FileName, PostContent, PostId};
use shared_kernel::errors::DomainError;

use crate::auth::CurrentSession;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::PostView;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentPayload {
    pub file_name: String,
    pub content_type: String,
    /// Contenu encodé en base64 standard
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
    pub attachment: Option<AttachmentPayload>,
}

impl AttachmentPayload {
    fn into_attachment(self) -> Result<Attachment, DomainError> {
        let bytes = STANDARD.decode(self.data.trim()).map_err(|e| DomainError::Validation {
            field: "attachment",
            reason: format!("Invalid base64 payload: {}", e),
        })?;
        Attachment::try_new(FileName::try_new(self.file_name)?, self.content_type, bytes)
    }
}

/// Auteur dénormalisé dans le post, tel qu'affiché au moment de la publication
fn author_of(session: &Session) -> Result<Author, DomainError> {
    Ok(Author::new(
        AuthorId::try_new(session.subject_id().as_str())?,
        session.display_name(),
        session.avatar_url().map(|u| u.as_str().to_string()),
    ))
}

fn requester_of(session: &Session) -> Result<AuthorId, DomainError> {
    AuthorId::try_new(session.subject_id().as_str())
}

/// GET /v1/feed?limit=N
pub async fn list_feed(
    State(state): State<AppState>,
    Query(query): Query<ListFeedQuery>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let posts = state.list_feed.execute(query).await?;
    Ok(Json(posts.iter().map(PostView::from).collect()))
}

/// POST /v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let cmd = CreatePostCommand {
        author: author_of(&session)?,
        content: PostContent::try_new(req.content)?,
        attachment: req.attachment.map(AttachmentPayload::into_attachment).transpose()?,
    };

    let post = state.create_post.execute(cmd).await?;
    Ok((StatusCode::CREATED, Json(PostView::from(&post))))
}

/// DELETE /v1/posts/:id (auteur uniquement)
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(post_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let cmd = DeletePostCommand {
        requester: requester_of(&session)?,
        post_id: PostId::try_new(post_id)?,
    };

    state.delete_post.execute(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
