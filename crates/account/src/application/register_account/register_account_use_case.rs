// crates/account/src/application/register_account/register_account_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::{with_retry, RetryConfig, TransactionManagerExt};

use crate::application::register_account::RegisterAccountCommand;
use crate::domain::entities::{HandleReservation, Identity, Session, UserProfile};
use crate::domain::ports::IdentityProvider;
use crate::domain::repositories::{HandleReservationRepository, SessionRepository, UserProfileRepository};
use crate::domain::value_objects::AvatarUrl;
use crate::errors::RegistrationError;

/// Compte créé. `session` est absente si elle n'a pas pu être enregistrée :
/// le compte reste utilisable via une connexion classique.
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    pub profile: UserProfile,
    pub session: Option<Session>,
}

/// Saga d'inscription en deux étapes visibles :
///
/// 1. création de l'identité chez le fournisseur (committée immédiatement) ;
/// 2. unité atomique : réservation du handle + écriture du profil.
///
/// Si l'étape 2 échoue, l'identité est supprimée (compensation). Entre les
/// deux étapes, une identité sans profil existe : c'est l'état partiel
/// de la saga.
pub struct RegisterAccountUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
    profile_repo: Arc<dyn UserProfileRepository>,
    reservation_repo: Arc<dyn HandleReservationRepository>,
    session_repo: Arc<dyn SessionRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
    retry: RetryConfig,
}

impl RegisterAccountUseCase {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        profile_repo: Arc<dyn UserProfileRepository>,
        reservation_repo: Arc<dyn HandleReservationRepository>,
        session_repo: Arc<dyn SessionRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity_provider,
            profile_repo,
            reservation_repo,
            session_repo,
            tx_manager,
            clock,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn execute(
        &self,
        cmd: RegisterAccountCommand,
    ) -> std::result::Result<RegisteredAccount, RegistrationError> {
        // --- ÉTAPE 1 : Identité (hors transaction) ---
        let identity = self
            .identity_provider
            .create_identity(&cmd.email, &cmd.password)
            .await
            .map_err(RegistrationError::Identity)?;

        tracing::info!(subject_id = %identity.subject_id(), "🪪 Identity created");

        let avatar_url = AvatarUrl::placeholder_for(&cmd.display_name);
        let identity = self.decorate_identity(identity, &cmd, &avatar_url).await;

        let profile = UserProfile::builder(
            identity.subject_id().clone(),
            cmd.display_name.clone(),
            cmd.handle.clone(),
            identity.email().clone(),
        )
        .with_avatar(avatar_url)
        .with_country(cmd.country.clone())
        .with_created_at(self.clock.now())
        .build();

        let reservation = HandleReservation::new(cmd.handle.clone(), identity.subject_id().clone());

        // --- ÉTAPE 2 : Unité atomique, rejouée uniquement sur conflit optimiste ---
        let written = with_retry(self.retry, || async {
            self.write_profile_once(&profile, &reservation).await
        })
        .await;

        if let Err(e) = written {
            let failure = Self::classify(e, &reservation);
            // --- ÉTAPE 3 : Compensation ---
            return Err(self.compensate(&identity, failure).await);
        }

        tracing::info!(
            subject_id = %profile.subject_id(),
            handle = %profile.handle(),
            "✅ Account registered"
        );

        let session = Session::establish(identity, Some(profile.clone()), self.clock.now());
        let session = match self.session_repo.save(&session).await {
            Ok(()) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "⚠️ Account created but session could not be stored");
                None
            }
        };

        Ok(RegisteredAccount { profile, session })
    }

    /// Nom et avatar côté fournisseur. Best effort : le profil porte les mêmes données.
    async fn decorate_identity(
        &self,
        identity: Identity,
        cmd: &RegisterAccountCommand,
        avatar_url: &AvatarUrl,
    ) -> Identity {
        match self
            .identity_provider
            .update_identity_profile(&identity, &cmd.display_name, avatar_url)
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                tracing::warn!(
                    subject_id = %identity.subject_id(),
                    error = %e,
                    "⚠️ Identity profile update failed, continuing"
                );
                identity
            }
        }
    }

    async fn write_profile_once(&self, profile: &UserProfile, reservation: &HandleReservation) -> Result<()> {
        let profile_repo = self.profile_repo.clone();
        let reservation_repo = self.reservation_repo.clone();
        let profile = profile.clone();
        let reservation = reservation.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                // Lecture avant toute écriture
                if reservation_repo
                    .find_by_handle(reservation.handle(), Some(&mut *tx))
                    .await?
                    .is_some()
                {
                    return Err(DomainError::AlreadyExists {
                        entity: HandleReservation::entity_name(),
                        field: "handle",
                        value: reservation.handle().to_string(),
                    });
                }

                profile_repo.create(&profile, &mut *tx).await?;
                reservation_repo.create(&reservation, &mut *tx).await?;
                Ok(())
            })
            .await
    }

    fn classify(error: DomainError, reservation: &HandleReservation) -> RegistrationError {
        match error {
            DomainError::AlreadyExists { entity, .. } if entity == HandleReservation::entity_name() => {
                RegistrationError::HandleTaken {
                    handle: reservation.handle().to_string(),
                }
            }
            other => RegistrationError::ProfileWriteFailed(other),
        }
    }

    async fn compensate(&self, identity: &Identity, failure: RegistrationError) -> RegistrationError {
        match self.identity_provider.delete_identity(identity).await {
            Ok(()) => {
                tracing::warn!(
                    subject_id = %identity.subject_id(),
                    reason = %failure,
                    "↩️ Registration aborted, identity rolled back"
                );
                failure
            }
            Err(rollback) => {
                tracing::error!(
                    subject_id = %identity.subject_id(),
                    email = %identity.email(),
                    reason = %failure,
                    rollback_error = %rollback,
                    manual_intervention = true,
                    "🚨 CRITICAL: Failed to roll back identity creation. Manual cleanup required"
                );
                RegistrationError::RollbackFailed {
                    subject_id: identity.subject_id().clone(),
                    original: Box::new(failure),
                    rollback,
                }
            }
        }
    }
}
