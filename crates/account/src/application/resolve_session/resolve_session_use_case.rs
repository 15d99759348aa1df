// crates/account/src/application/resolve_session/resolve_session_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::domain::value_objects::SessionToken;

/// Retrouve l'utilisateur courant à partir d'un jeton porteur
pub struct ResolveSessionUseCase {
    session_repo: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl ResolveSessionUseCase {
    pub fn new(session_repo: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { session_repo, clock }
    }

    pub async fn execute(&self, token: SessionToken) -> Result<Session> {
        let session = self
            .session_repo
            .find(&token)
            .await?
            .ok_or_else(|| DomainError::Unauthorized {
                reason: "Session not found".into(),
            })?;

        if session.is_expired(self.clock.now()) {
            // Expiration signalée par le fournisseur : la session est effacée
            self.session_repo.delete(&token).await?;
            tracing::info!(subject_id = %session.subject_id(), "⌛ Session expired and cleared");
            return Err(DomainError::Unauthorized {
                reason: "Session expired, please sign in again".into(),
            });
        }

        Ok(session)
    }
}
