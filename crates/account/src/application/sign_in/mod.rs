mod sign_in_command;
mod sign_in_dto;
mod sign_in_use_case;

#[cfg(test)]
mod sign_in_use_case_test;

pub use sign_in_command::SignInCommand;
pub use sign_in_dto::SignInDto;
pub use sign_in_use_case::SignInUseCase;
