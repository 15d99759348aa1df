mod sign_out_use_case;

pub use sign_out_use_case::SignOutUseCase;
