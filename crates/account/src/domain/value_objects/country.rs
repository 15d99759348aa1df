// crates/account/src/domain/value_objects/country.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Pays déclaré à l'inscription, texte libre (peut être vide)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    pub const MAX_LENGTH: usize = 100;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let country = Self(value.into().trim().to_string());
        country.validate()?;
        Ok(country)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Country {
    fn validate(&self) -> Result<()> {
        if self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "country",
                reason: format!("Country too long (max {})", Self::MAX_LENGTH),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for Country {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}
