// backend/services/account-api/src/handlers/accounts.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use account::application::delete_account::DeleteAccountDto;
use account::application::register_account::{RegisterAccountCommand, RegisterAccountDto};
use account::errors::RegistrationError;

use crate::auth::CurrentSession;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{ProfileView, RegisteredView, SessionView};

/// POST /v1/accounts
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterAccountDto>,
) -> Result<(StatusCode, Json<RegisteredView>), ApiError> {
    let cmd = RegisterAccountCommand::try_from(dto).map_err(RegistrationError::InvalidInput)?;
    let registered = state.register.execute(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredView {
            profile: ProfileView::from(&registered.profile),
            session: registered.session.as_ref().map(SessionView::from),
        }),
    ))
}

/// DELETE /v1/accounts : réauthentification par mot de passe
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(dto): Json<DeleteAccountDto>,
) -> Result<StatusCode, ApiError> {
    let cmd = dto.into_command(session)?;
    state.delete_account.execute(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
