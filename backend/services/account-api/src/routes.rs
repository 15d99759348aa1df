// backend/services/account-api/src/routes.rs

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{accounts, media, posts, profiles, sessions};
use crate::state::AppState;

/// Pièce jointe de 5 MiB encodée en base64, plus l'enveloppe JSON
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/accounts", post(accounts::register).delete(accounts::delete_account))
        .route("/sessions", post(sessions::sign_in).delete(sessions::sign_out))
        .route("/sessions/current", get(sessions::current))
        .route("/profiles/:subject_id", get(profiles::get_profile))
        .route("/handles/:handle", get(profiles::get_profile_by_handle))
        .route("/feed", get(posts::list_feed))
        .route("/posts", post(posts::create_post))
        .route("/posts/:id", delete(posts::delete_post));

    Router::new()
        .nest("/v1", v1)
        .route("/media/*path", get(media::get_object))
        .route("/health", get(|| async { "ok" }))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
