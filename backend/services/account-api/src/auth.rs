// backend/services/account-api/src/auth.rs

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use account::domain::entities::Session;
use account::domain::value_objects::SessionToken;
use shared_kernel::errors::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Jeton `Authorization: Bearer <session_token>`, non résolu
pub struct BearerToken(pub SessionToken);

#[axum::async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| DomainError::Unauthorized {
                    reason: "Missing bearer token".into(),
                })?;

        Ok(Self(bearer.token().parse::<SessionToken>()?))
    }
}

/// Session courante, résolue et non expirée
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let session = state.resolve_session.execute(token).await?;
        Ok(Self(session))
    }
}
