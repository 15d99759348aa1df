// crates/account/src/application/register_account/register_account_dto.rs

use serde::Deserialize;
use shared_kernel::errors::{DomainError, Result};

use crate::application::register_account::RegisterAccountCommand;
use crate::domain::value_objects::{Country, DisplayName, Email, Handle, Password};

#[derive(Debug, Deserialize)]
pub struct RegisterAccountDto {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub country: String,
}

impl TryFrom<RegisterAccountDto> for RegisterAccountCommand {
    type Error = DomainError;

    fn try_from(dto: RegisterAccountDto) -> Result<Self> {
        Ok(Self {
            display_name: DisplayName::try_new(dto.name)?,
            handle: Handle::try_new(dto.username)?,
            email: Email::try_new(dto.email)?,
            password: Password::try_new(dto.password)?,
            country: Country::try_new(dto.country)?,
        })
    }
}
