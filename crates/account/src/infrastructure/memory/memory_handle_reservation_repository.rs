// crates/account/src/infrastructure/memory/memory_handle_reservation_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::memory::{DocumentPath, MemoryDocumentStore};

use crate::domain::entities::HandleReservation;
use crate::domain::repositories::HandleReservationRepository;
use crate::domain::value_objects::Handle;
use crate::infrastructure::memory::documents::{UsernameDocument, USERNAMES};

/// L'unicité repose sur le commit optimiste du store : deux transactions
/// ayant lu l'absence de `usernames/{handle}` ne peuvent pas toutes deux committer.
pub struct MemoryHandleReservationRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryHandleReservationRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        Self { store }
    }

    fn path(handle: &Handle) -> DocumentPath {
        DocumentPath::new(USERNAMES, handle.as_str())
    }
}

#[async_trait]
impl HandleReservationRepository for MemoryHandleReservationRepository {
    async fn find_by_handle(
        &self,
        handle: &Handle,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<HandleReservation>> {
        let doc = self.store.get_as::<UsernameDocument>(&Self::path(handle), tx)?;
        Ok(doc.map(|d| d.into_reservation(handle)))
    }

    async fn create(&self, reservation: &HandleReservation, tx: &mut dyn Transaction) -> Result<()> {
        self.store.set_as(
            Self::path(reservation.handle()),
            &UsernameDocument::from(reservation),
            Some(tx),
        )
    }

    async fn delete(&self, handle: &Handle, tx: &mut dyn Transaction) -> Result<()> {
        self.store.delete(Self::path(handle), Some(tx))
    }
}
