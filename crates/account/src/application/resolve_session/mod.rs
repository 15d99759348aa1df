mod resolve_session_use_case;

pub use resolve_session_use_case::ResolveSessionUseCase;
