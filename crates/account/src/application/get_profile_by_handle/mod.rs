mod get_profile_by_handle_use_case;

pub use get_profile_by_handle_use_case::GetProfileByHandleUseCase;
