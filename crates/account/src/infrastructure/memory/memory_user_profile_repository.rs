// crates/account/src/infrastructure/memory/memory_user_profile_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::memory::{DocumentPath, MemoryDocumentStore};

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;
use crate::domain::value_objects::SubjectId;
use crate::infrastructure::memory::documents::{UserDocument, USERS};

pub struct MemoryUserProfileRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryUserProfileRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        Self { store }
    }

    fn path(subject_id: &SubjectId) -> DocumentPath {
        DocumentPath::new(USERS, subject_id.as_str())
    }
}

#[async_trait]
impl UserProfileRepository for MemoryUserProfileRepository {
    async fn find_by_subject_id(
        &self,
        subject_id: &SubjectId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserProfile>> {
        let doc = self.store.get_as::<UserDocument>(&Self::path(subject_id), tx)?;
        Ok(doc.map(UserProfile::from))
    }

    async fn create(&self, profile: &UserProfile, tx: &mut dyn Transaction) -> Result<()> {
        self.store.set_as(
            Self::path(profile.subject_id()),
            &UserDocument::from(profile),
            Some(tx),
        )
    }

    async fn delete(&self, subject_id: &SubjectId, tx: &mut dyn Transaction) -> Result<()> {
        self.store.delete(Self::path(subject_id), Some(tx))
    }
}
