// crates/shared-kernel/src/domain/value_objects/counter.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Compteur non négatif (ex: codes promotionnels utilisés)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter(u64);

impl Counter {
    pub fn zero() -> Self {
        Self(0)
    }

    /// Depuis un stockage signé (colonnes BIGINT), rejette les valeurs négatives
    pub fn try_from_i64(field: &'static str, val: i64) -> Result<Self> {
        u64::try_from(val)
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field,
                reason: format!("Counter cannot be negative (got {val})"),
            })
    }

    pub fn from_raw(val: u64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Counter {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl From<Counter> for u64 {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}
