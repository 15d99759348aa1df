// crates/account/src/application/get_profile/get_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;
use crate::domain::value_objects::SubjectId;

pub struct GetProfileUseCase {
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(profile_repo: Arc<dyn UserProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(&self, subject_id: &SubjectId) -> Result<UserProfile> {
        self.profile_repo
            .find_by_subject_id(subject_id, None)
            .await?
            .ok_or_not_found(subject_id)
    }
}
