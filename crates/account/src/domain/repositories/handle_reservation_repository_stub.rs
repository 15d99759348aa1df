use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::HandleReservation;
use crate::domain::repositories::HandleReservationRepository;
use crate::domain::value_objects::Handle;

#[derive(Default)]
pub struct HandleReservationRepositoryStub {
    pub reservations: Arc<Mutex<HashMap<Handle, HandleReservation>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Nombre d'appels à `find_by_handle` (vérifie les rejeux)
    pub lookups: Arc<Mutex<usize>>,
}

impl HandleReservationRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reservation(&self, reservation: HandleReservation) {
        self.reservations.lock().unwrap().insert(reservation.handle().clone(), reservation);
    }

    pub fn count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl HandleReservationRepository for HandleReservationRepositoryStub {
    async fn find_by_handle(
        &self,
        handle: &Handle,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<HandleReservation>> {
        *self.lookups.lock().unwrap() += 1;
        self.check_error()?;
        Ok(self.reservations.lock().unwrap().get(handle).cloned())
    }

    async fn create(&self, reservation: &HandleReservation, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        let mut reservations = self.reservations.lock().unwrap();
        if reservations.contains_key(reservation.handle()) {
            return Err(DomainError::AlreadyExists {
                entity: "HandleReservation",
                field: "handle",
                value: reservation.handle().to_string(),
            });
        }
        reservations.insert(reservation.handle().clone(), reservation.clone());
        Ok(())
    }

    async fn delete(&self, handle: &Handle, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        self.reservations.lock().unwrap().remove(handle);
        Ok(())
    }
}
