// crates/account/src/domain/repositories/handle_reservation_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::HandleReservation;
use crate::domain::value_objects::Handle;

#[async_trait]
pub trait HandleReservationRepository: Send + Sync {
    async fn find_by_handle(
        &self,
        handle: &Handle,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<HandleReservation>>;

    /// Échoue en `AlreadyExists` si le store détecte une réservation concurrente
    async fn create(&self, reservation: &HandleReservation, tx: &mut dyn Transaction) -> Result<()>;

    async fn delete(&self, handle: &Handle, tx: &mut dyn Transaction) -> Result<()>;
}
