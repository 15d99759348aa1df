// crates/account/src/application/sign_in/sign_in_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::sign_in::SignInCommand;
use crate::domain::entities::Session;
use crate::domain::ports::IdentityProvider;
use crate::domain::repositories::{SessionRepository, UserProfileRepository};

pub struct SignInUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
    profile_repo: Arc<dyn UserProfileRepository>,
    session_repo: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl SignInUseCase {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        profile_repo: Arc<dyn UserProfileRepository>,
        session_repo: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { identity_provider, profile_repo, session_repo, clock }
    }

    pub async fn execute(&self, cmd: SignInCommand) -> Result<Session> {
        let identity = self.identity_provider.sign_in(&cmd.email, &cmd.password).await?;

        let profile = self
            .profile_repo
            .find_by_subject_id(identity.subject_id(), None)
            .await?;

        // Identité sans profil (ex: inscription orpheline) : profil provisoire
        if profile.is_none() {
            tracing::warn!(
                subject_id = %identity.subject_id(),
                "⚠️ No profile document for identity, using provisional profile"
            );
        }

        let session = Session::establish(identity, profile, self.clock.now());
        self.session_repo.save(&session).await?;

        tracing::info!(subject_id = %session.subject_id(), "🔑 Session established");
        Ok(session)
    }
}
