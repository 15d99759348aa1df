// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const SERIALIZATION_FAILURE: &str = "40001";

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| {
            classify_sqlx_error(e, E::entity_name(), E::map_constraint_to_field)
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}

/// Classification commune (repositories et commit du transaction manager)
pub fn classify_sqlx_error(
    e: sqlx::Error,
    entity: &'static str,
    constraint_to_field: fn(&str) -> &'static str,
) -> DomainError {
    match e {
        sqlx::Error::RowNotFound => DomainError::NotFound {
            entity,
            id: "unknown".into(),
        },
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned());

            // 1. Violation d'unicité
            if code.as_deref() == Some(UNIQUE_VIOLATION) {
                let field = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.constraint())
                    .map(constraint_to_field)
                    .unwrap_or("unique_constraint");

                return DomainError::AlreadyExists {
                    entity,
                    field,
                    value: "already taken".into(),
                };
            }

            // 2. Concurrence (SERIALIZABLE)
            if code.as_deref() == Some(SERIALIZATION_FAILURE) {
                return DomainError::ConcurrencyConflict {
                    reason: format!("Concurrency conflict on {}", entity),
                };
            }

            DomainError::Infrastructure(db_err.message().into())
        }
        _ => DomainError::Infrastructure(e.to_string()),
    }
}
