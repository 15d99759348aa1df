mod delete_account_command;
mod delete_account_dto;
mod delete_account_use_case;


pub use delete_account_command::DeleteAccountCommand;
pub use delete_account_dto::DeleteAccountDto;
pub use delete_account_use_case::DeleteAccountUseCase;
