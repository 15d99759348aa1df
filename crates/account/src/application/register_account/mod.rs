mod register_account_command;
mod register_account_dto;
mod register_account_use_case;


pub use register_account_command::RegisterAccountCommand;
pub use register_account_dto::RegisterAccountDto;
pub use register_account_use_case::{RegisterAccountUseCase, RegisteredAccount};
