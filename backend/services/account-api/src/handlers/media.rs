// backend/services/account-api/src/handlers/media.rs

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use feed::domain::value_objects::ObjectPath;
use shared_kernel::errors::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /media/*path : pièces jointes du stockage en mémoire
pub async fn get_object(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let object = state
        .media
        .get(&ObjectPath::from_raw(path.clone()))
        .await
        .ok_or(DomainError::NotFound { entity: "MediaObject", id: path })?;

    Ok(([(header::CONTENT_TYPE, object.content_type)], object.bytes).into_response())
}
