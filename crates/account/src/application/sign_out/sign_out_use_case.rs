// crates/account/src/application/sign_out/sign_out_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::domain::repositories::SessionRepository;
use crate::domain::value_objects::SessionToken;

pub struct SignOutUseCase {
    session_repo: Arc<dyn SessionRepository>,
}

impl SignOutUseCase {
    pub fn new(session_repo: Arc<dyn SessionRepository>) -> Self {
        Self { session_repo }
    }

    /// Idempotent : un jeton inconnu ou déjà effacé n'est pas une erreur
    pub async fn execute(&self, token: SessionToken) -> Result<()> {
        self.session_repo.delete(&token).await?;
        tracing::info!("👋 Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::entities::{Identity, Session};
    use crate::domain::repositories::SessionRepositoryStub;
    use crate::domain::value_objects::{Email, SubjectId};

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let sessions = Arc::new(SessionRepositoryStub::new());
        let use_case = SignOutUseCase::new(sessions.clone());

        let session = Session::establish(
            Identity::new(SubjectId::from_raw("uid-1"), Email::try_new("a@x.io").unwrap()),
            None,
            Utc::now(),
        );
        sessions.add_session(session.clone());

        use_case.execute(session.token()).await.unwrap();
        use_case.execute(session.token()).await.unwrap();

        assert_eq!(sessions.count(), 0);
    }
}
