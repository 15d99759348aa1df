// crates/account/src/domain/repositories/session_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Session;
use crate::domain::value_objects::{SessionToken, SubjectId};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> Result<()>;

    async fn find(&self, token: &SessionToken) -> Result<Option<Session>>;

    /// Idempotent : supprimer un jeton inconnu n'est pas une erreur
    async fn delete(&self, token: &SessionToken) -> Result<()>;

    async fn delete_all_for(&self, subject_id: &SubjectId) -> Result<()>;
}
