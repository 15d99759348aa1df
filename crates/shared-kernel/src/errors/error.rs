// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String
    },

    /// Conflit optimiste détecté par le store au moment du commit
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict {
        reason: String
    },

    /// Échec définitif après plusieurs tentatives de retry
    #[error("Operation failed after maximum retries: {0}")]
    TooManyConflicts(String),

    /// Identité non valide (mauvais mot de passe, session expirée)
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String
    },

    /// Accès interdit malgré une identité valide
    #[error("Forbidden: {reason}")]
    Forbidden {
        reason: String
    },

    /// Erreur liée à l'infrastructure (DB, fournisseur d'identité, stockage)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Utilisé par la boucle de Retry
    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Panne technique : le détail reste dans les logs, jamais dans la réponse
    pub fn is_technical(&self) -> bool {
        matches!(self, Self::Infrastructure(_) | Self::Internal(_) | Self::TooManyConflicts(_))
    }
}
