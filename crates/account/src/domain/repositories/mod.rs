mod handle_reservation_repository;
mod session_repository;
mod user_profile_repository;

pub use handle_reservation_repository::HandleReservationRepository;
pub use session_repository::SessionRepository;
pub use user_profile_repository::UserProfileRepository;

#[cfg(test)]
mod handle_reservation_repository_stub;
#[cfg(test)]
mod session_repository_stub;
#[cfg(test)]
mod user_profile_repository_stub;

#[cfg(test)]
pub use handle_reservation_repository_stub::HandleReservationRepositoryStub;
#[cfg(test)]
pub use session_repository_stub::SessionRepositoryStub;
#[cfg(test)]
pub use user_profile_repository_stub::UserProfileRepositoryStub;
