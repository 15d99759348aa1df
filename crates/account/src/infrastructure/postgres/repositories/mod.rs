mod postgres_handle_reservation_repository;
mod postgres_user_profile_repository;

pub use postgres_handle_reservation_repository::PostgresHandleReservationRepository;
pub use postgres_user_profile_repository::PostgresUserProfileRepository;
