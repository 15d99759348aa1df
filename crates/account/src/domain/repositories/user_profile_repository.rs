// crates/account/src/domain/repositories/user_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;
use crate::domain::value_objects::SubjectId;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Lecture simple, ou lecture enregistrée dans l'unité atomique si `tx` est fourni
    async fn find_by_subject_id(
        &self,
        subject_id: &SubjectId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserProfile>>;

    /// Création initiale, obligatoirement avec la réservation du handle
    async fn create(&self, profile: &UserProfile, tx: &mut dyn Transaction) -> Result<()>;

    async fn delete(&self, subject_id: &SubjectId, tx: &mut dyn Transaction) -> Result<()>;
}
