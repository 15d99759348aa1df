mod postgres_handle_reservation_row;
mod postgres_user_profile_row;

pub use postgres_handle_reservation_row::PostgresHandleReservationRow;
pub use postgres_user_profile_row::PostgresUserProfileRow;
