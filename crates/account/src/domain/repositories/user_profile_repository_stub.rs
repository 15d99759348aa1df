use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;
use crate::domain::value_objects::SubjectId;

#[derive(Default)]
pub struct UserProfileRepositoryStub {
    pub profiles: Arc<Mutex<HashMap<SubjectId, UserProfile>>>,
    /// Erreur renvoyée par n'importe quelle méthode
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl UserProfileRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_profile(&self, profile: UserProfile) {
        self.profiles.lock().unwrap().insert(profile.subject_id().clone(), profile);
    }

    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl UserProfileRepository for UserProfileRepositoryStub {
    async fn find_by_subject_id(
        &self,
        subject_id: &SubjectId,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserProfile>> {
        self.check_error()?;
        Ok(self.profiles.lock().unwrap().get(subject_id).cloned())
    }

    async fn create(&self, profile: &UserProfile, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        self.add_profile(profile.clone());
        Ok(())
    }

    async fn delete(&self, subject_id: &SubjectId, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        self.profiles.lock().unwrap().remove(subject_id);
        Ok(())
    }
}
