// backend/services/account-api/src/handlers/sessions.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use account::application::sign_in::{SignInCommand, SignInDto};

use crate::auth::{BearerToken, CurrentSession};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::SessionView;

/// POST /v1/sessions
pub async fn sign_in(
    State(state): State<AppState>,
    Json(dto): Json<SignInDto>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.sign_in.execute(SignInCommand::try_from(dto)?).await?;
    Ok(Json(SessionView::from(&session)))
}

/// DELETE /v1/sessions (idempotent)
pub async fn sign_out(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    state.sign_out.execute(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/sessions/current
pub async fn current(CurrentSession(session): CurrentSession) -> Json<SessionView> {
    Json(SessionView::from(&session))
}
