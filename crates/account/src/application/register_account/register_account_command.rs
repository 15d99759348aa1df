// crates/account/src/application/register_account/register_account_command.rs

use crate::domain::value_objects::{Country, DisplayName, Email, Handle, Password};

#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub display_name: DisplayName,
    pub handle: Handle,
    pub email: Email,
    pub password: Password,
    pub country: Country,
}
