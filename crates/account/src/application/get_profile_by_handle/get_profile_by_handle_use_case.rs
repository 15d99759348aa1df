// crates/account/src/application/get_profile_by_handle/get_profile_by_handle_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::{EntityMetadata, EntityOptionExt};
use shared_kernel::errors::Result;

use crate::domain::entities::{HandleReservation, UserProfile};
use crate::domain::repositories::{HandleReservationRepository, UserProfileRepository};
use crate::domain::value_objects::Handle;

/// Résolution insensible à la casse via la réservation
pub struct GetProfileByHandleUseCase {
    reservation_repo: Arc<dyn HandleReservationRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl GetProfileByHandleUseCase {
    pub fn new(
        reservation_repo: Arc<dyn HandleReservationRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self { reservation_repo, profile_repo }
    }

    pub async fn execute(&self, handle: &Handle) -> Result<UserProfile> {
        let reservation = self
            .reservation_repo
            .find_by_handle(handle, None)
            .await?
            .ok_or_else(|| HandleReservation::not_found(handle))?;

        self.profile_repo
            .find_by_subject_id(reservation.owner(), None)
            .await?
            .ok_or_not_found(reservation.owner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::errors::DomainError;
    use crate::domain::repositories::{HandleReservationRepositoryStub, UserProfileRepositoryStub};
    use crate::domain::value_objects::{DisplayName, Email, SubjectId};

    fn setup() -> (GetProfileByHandleUseCase, Arc<HandleReservationRepositoryStub>, Arc<UserProfileRepositoryStub>) {
        let reservations = Arc::new(HandleReservationRepositoryStub::new());
        let profiles = Arc::new(UserProfileRepositoryStub::new());
        let use_case = GetProfileByHandleUseCase::new(reservations.clone(), profiles.clone());
        (use_case, reservations, profiles)
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let (use_case, reservations, profiles) = setup();
        let owner = SubjectId::from_raw("uid-1");
        reservations.add_reservation(HandleReservation::new(Handle::try_new("ann").unwrap(), owner.clone()));
        profiles.add_profile(
            UserProfile::builder(owner, DisplayName::try_new("Ann").unwrap(), Handle::try_new("ann").unwrap(), Email::try_new("ann@x.io").unwrap())
                .build(),
        );

        let profile = use_case.execute(&Handle::try_new("ANN").unwrap()).await.unwrap();
        assert_eq!(profile.subject_id().as_str(), "uid-1");
    }

    #[tokio::test]
    async fn test_unknown_handle() {
        let (use_case, _, _) = setup();

        let result = use_case.execute(&Handle::try_new("ghost").unwrap()).await;
        assert!(matches!(result, Err(DomainError::NotFound { entity: "HandleReservation", .. })));
    }

    #[tokio::test]
    async fn test_reservation_without_profile() {
        let (use_case, reservations, _) = setup();
        reservations.add_reservation(HandleReservation::new(Handle::try_new("ann").unwrap(), SubjectId::from_raw("uid-9")));

        let result = use_case.execute(&Handle::try_new("ann").unwrap()).await;
        assert!(matches!(result, Err(DomainError::NotFound { entity: "UserProfile", .. })));
    }
}
