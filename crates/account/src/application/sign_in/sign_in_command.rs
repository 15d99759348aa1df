// crates/account/src/application/sign_in/sign_in_command.rs

use crate::domain::value_objects::{Email, Password};

#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: Email,
    pub password: Password,
}
