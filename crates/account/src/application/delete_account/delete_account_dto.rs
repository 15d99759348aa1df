// crates/account/src/application/delete_account/delete_account_dto.rs

use serde::Deserialize;
use shared_kernel::errors::{DomainError, Result};

use crate::application::delete_account::DeleteAccountCommand;
use crate::domain::entities::Session;
use crate::domain::value_objects::Password;

#[derive(Debug, Deserialize)]
pub struct DeleteAccountDto {
    pub password: String,
}

impl DeleteAccountDto {
    /// La session vient du jeton porteur, pas du corps de la requête
    pub fn into_command(self, session: Session) -> Result<DeleteAccountCommand> {
        let password = Password::try_new(self.password).map_err(|_| DomainError::Unauthorized {
            reason: "Incorrect password. Please try again.".into(),
        })?;

        Ok(DeleteAccountCommand { session, password })
    }
}
