// crates/account/src/application/delete_account/delete_account_command.rs

use crate::domain::entities::Session;
use crate::domain::value_objects::Password;

#[derive(Debug, Clone)]
pub struct DeleteAccountCommand {
    pub session: Session,
    /// Ré-authentification obligatoire
    pub password: Password,
}
