// crates/account/src/infrastructure/postgres/rows/postgres_handle_reservation_row.rs

use crate::domain::entities::HandleReservation;
use crate::domain::value_objects::{Handle, SubjectId};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresHandleReservationRow {
    pub handle: String,
    pub subject_id: String,
}

impl From<PostgresHandleReservationRow> for HandleReservation {
    fn from(row: PostgresHandleReservationRow) -> Self {
        HandleReservation::new(Handle::from_raw(row.handle), SubjectId::from_raw(row.subject_id))
    }
}
