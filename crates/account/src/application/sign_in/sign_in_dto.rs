// crates/account/src/application/sign_in/sign_in_dto.rs

use serde::Deserialize;
use shared_kernel::errors::{DomainError, Result};

use crate::application::sign_in::SignInCommand;
use crate::domain::value_objects::{Email, Password};

#[derive(Debug, Deserialize)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

impl TryFrom<SignInDto> for SignInCommand {
    type Error = DomainError;

    fn try_from(dto: SignInDto) -> Result<Self> {
        Ok(Self {
            email: Email::try_new(dto.email)?,
            // Le fournisseur tranche : pas de politique appliquée à la connexion
            password: Password::try_new(dto.password).map_err(|_| DomainError::Unauthorized {
                reason: "Invalid email or password".into(),
            })?,
        })
    }
}
