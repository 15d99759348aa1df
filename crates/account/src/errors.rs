// crates/account/src/errors.rs

use shared_kernel::errors::{AppError, DomainError, ErrorCode};
use thiserror::Error;

use crate::domain::value_objects::SubjectId;

/// Issue d'une inscription qui n'a pas abouti.
///
/// Chaque variante est distinguable par l'appelant : seul `HandleTaken`
/// est corrigeable par l'utilisateur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// Saisie rejetée avant tout appel externe
    #[error("Invalid registration input: {0}")]
    InvalidInput(DomainError),

    /// Le fournisseur a refusé de créer l'identité (rien à compenser)
    #[error("Identity creation failed: {0}")]
    Identity(DomainError),

    #[error("Handle '{handle}' is already taken")]
    HandleTaken { handle: String },

    /// L'unité atomique a échoué pour une autre raison ; identité supprimée
    #[error("Profile write failed: {0}")]
    ProfileWriteFailed(DomainError),

    /// La compensation a échoué : l'identité `subject_id` est orpheline
    #[error("Rollback of identity {subject_id} failed after '{original}': {rollback}")]
    RollbackFailed {
        subject_id: SubjectId,
        original: Box<RegistrationError>,
        rollback: DomainError,
    },
}

impl RegistrationError {
    pub fn is_handle_taken(&self) -> bool {
        matches!(self, Self::HandleTaken { .. })
    }

    pub fn is_rollback_failed(&self) -> bool {
        matches!(self, Self::RollbackFailed { .. })
    }

    /// Erreur déterminée avant la compensation
    pub fn root_cause(&self) -> &RegistrationError {
        match self {
            Self::RollbackFailed { original, .. } => original.root_cause(),
            other => other,
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(error: RegistrationError) -> Self {
        match error {
            RegistrationError::InvalidInput(e) | RegistrationError::Identity(e) => e.into(),

            RegistrationError::HandleTaken { handle } => Self::new(
                ErrorCode::HandleTaken,
                "This username is already taken. Please choose another one.",
            )
            .with_details(serde_json::json!({ "handle": handle })),

            RegistrationError::ProfileWriteFailed(_) => Self::new(
                ErrorCode::AccountSetupFailed,
                "Failed to set up your account. Please try again later.",
            ),

            // L'orphelin reste côté logs, jamais exposé
            RegistrationError::RollbackFailed { .. } => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}
