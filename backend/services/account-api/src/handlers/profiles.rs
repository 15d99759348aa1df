// backend/services/account-api/src/handlers/profiles.rs

use axum::extract::{Path, State};
use axum::Json;
use account::domain::value_objects::{Handle, SubjectId};

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::ProfileView;

/// GET /v1/profiles/:subject_id
pub async fn get_profile(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = state.get_profile.execute(&SubjectId::try_new(subject_id)?).await?;
    Ok(Json(ProfileView::from(&profile)))
}

/// GET /v1/handles/:handle (insensible à la casse)
pub async fn get_profile_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = state.get_profile_by_handle.execute(&Handle::try_new(handle)?).await?;
    Ok(Json(ProfileView::from(&profile)))
}
