// crates/account/src/infrastructure/postgres/repositories/postgres_handle_reservation_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as};

use crate::domain::entities::HandleReservation;
use crate::domain::repositories::HandleReservationRepository;
use crate::domain::value_objects::Handle;
use crate::infrastructure::postgres::rows::PostgresHandleReservationRow;

/// Deux inscriptions concurrentes sur le même handle : la seconde bloque
/// sur la clé primaire puis échoue en 23505 (`AlreadyExists`).
pub struct PostgresHandleReservationRepository {
    pool: Pool<Postgres>,
}

impl PostgresHandleReservationRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HandleReservationRepository for PostgresHandleReservationRepository {
    async fn find_by_handle(
        &self,
        handle: &Handle,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<HandleReservation>> {
        let h = handle.as_str().to_string();
        let has_tx = tx.is_some();

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                let sql = if has_tx {
                    "SELECT handle, subject_id FROM usernames WHERE handle = $1 FOR UPDATE"
                } else {
                    "SELECT handle, subject_id FROM usernames WHERE handle = $1"
                };

                query_as::<_, PostgresHandleReservationRow>(sql)
                    .bind(h)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<HandleReservation>()
            })
        })
        .await?;

        Ok(row.map(HandleReservation::from))
    }

    async fn create(&self, reservation: &HandleReservation, tx: &mut dyn Transaction) -> Result<()> {
        let h = reservation.handle().as_str().to_string();
        let owner = reservation.owner().as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| {
            Box::pin(async move {
                query("INSERT INTO usernames (handle, subject_id) VALUES ($1, $2)")
                    .bind(h)
                    .bind(owner)
                    .execute(conn)
                    .await
                    .map_domain::<HandleReservation>()?;
                Ok(())
            })
        })
        .await
    }

    async fn delete(&self, handle: &Handle, tx: &mut dyn Transaction) -> Result<()> {
        let h = handle.as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| {
            Box::pin(async move {
                query("DELETE FROM usernames WHERE handle = $1")
                    .bind(h)
                    .execute(conn)
                    .await
                    .map_domain::<HandleReservation>()?;
                Ok(())
            })
        })
        .await
    }
}
