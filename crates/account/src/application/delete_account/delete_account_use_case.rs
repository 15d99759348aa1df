// crates/account/src/application/delete_account/delete_account_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::{with_retry, RetryConfig, TransactionManagerExt};

use crate::application::delete_account::DeleteAccountCommand;
use crate::domain::ports::IdentityProvider;
use crate::domain::repositories::{HandleReservationRepository, SessionRepository, UserProfileRepository};
use crate::domain::value_objects::SubjectId;

pub struct DeleteAccountUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
    profile_repo: Arc<dyn UserProfileRepository>,
    reservation_repo: Arc<dyn HandleReservationRepository>,
    session_repo: Arc<dyn SessionRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl DeleteAccountUseCase {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        profile_repo: Arc<dyn UserProfileRepository>,
        reservation_repo: Arc<dyn HandleReservationRepository>,
        session_repo: Arc<dyn SessionRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { identity_provider, profile_repo, reservation_repo, session_repo, tx_manager }
    }

    pub async fn execute(&self, cmd: DeleteAccountCommand) -> Result<()> {
        // 1. RÉ-AUTHENTIFICATION
        let identity = self
            .identity_provider
            .reauthenticate(cmd.session.identity(), &cmd.password)
            .await
            .map_err(|e| match e {
                DomainError::Unauthorized { .. } => DomainError::Unauthorized {
                    reason: "Incorrect password. Please try again.".into(),
                },
                other => other,
            })?;

        let subject_id = identity.subject_id().clone();

        // 2. PROFIL + RÉSERVATION (ensemble ou pas du tout)
        with_retry(RetryConfig::default(), || async {
            self.delete_documents_once(&subject_id).await
        })
        .await?;

        // 3. IDENTITÉ : racine du compte, supprimée en dernier
        if let Err(e) = self.identity_provider.delete_identity(&identity).await {
            tracing::error!(
                subject_id = %subject_id,
                error = %e,
                manual_intervention = true,
                "🚨 Profile deleted but identity deletion failed"
            );
            return Err(e);
        }

        // 4. SESSIONS
        if let Err(e) = self.session_repo.delete_all_for(&subject_id).await {
            tracing::warn!(subject_id = %subject_id, error = %e, "⚠️ Sessions could not be cleared");
        }

        tracing::info!(subject_id = %subject_id, "🗑️ Account deleted");
        Ok(())
    }

    async fn delete_documents_once(&self, subject_id: &SubjectId) -> Result<()> {
        let profile_repo = self.profile_repo.clone();
        let reservation_repo = self.reservation_repo.clone();
        let subject_id = subject_id.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                // Le handle n'est connu que par le profil : lectures d'abord
                let Some(profile) = profile_repo.find_by_subject_id(&subject_id, Some(&mut *tx)).await? else {
                    return Ok(());
                };

                let reservation = reservation_repo
                    .find_by_handle(profile.handle(), Some(&mut *tx))
                    .await?;

                profile_repo.delete(&subject_id, &mut *tx).await?;

                // Une réservation appartenant à un autre compte n'est jamais touchée
                if let Some(reservation) = reservation.filter(|r| r.is_owned_by(&subject_id)) {
                    reservation_repo.delete(reservation.handle(), &mut *tx).await?;
                }

                Ok(())
            })
            .await
    }
}
