// crates/account/src/domain/entities/handle_reservation.rs

use shared_kernel::domain::entities::EntityMetadata;
use crate::domain::value_objects::{Handle, SubjectId};

/// Document `usernames/{handle}` : au plus un par handle normalisé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleReservation {
    handle: Handle,
    owner: SubjectId,
}

impl HandleReservation {
    pub fn new(handle: Handle, owner: SubjectId) -> Self {
        Self { handle, owner }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn owner(&self) -> &SubjectId {
        &self.owner
    }

    pub fn is_owned_by(&self, subject_id: &SubjectId) -> bool {
        &self.owner == subject_id
    }
}

impl EntityMetadata for HandleReservation {
    fn entity_name() -> &'static str {
        "HandleReservation"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "usernames_pkey" => "handle",
            _ => "unique_constraint",
        }
    }
}
