// crates/account/src/infrastructure/memory/mod.rs

mod documents;
mod memory_handle_reservation_repository;
mod memory_identity_provider;
mod memory_session_repository;
mod memory_user_profile_repository;

pub use documents::{UserDocument, UsernameDocument, USERNAMES, USERS};
pub use memory_handle_reservation_repository::MemoryHandleReservationRepository;
pub use memory_identity_provider::MemoryIdentityProvider;
pub use memory_session_repository::MemorySessionRepository;
pub use memory_user_profile_repository::MemoryUserProfileRepository;
