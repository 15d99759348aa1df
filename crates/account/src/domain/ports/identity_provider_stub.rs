use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Identity, IdentityCredential};
use crate::domain::ports::IdentityProvider;
use crate::domain::value_objects::{AvatarUrl, DisplayName, Email, Password, SubjectId};

/// Fournisseur simulé : les erreurs sont injectables opération par opération
#[derive(Default)]
pub struct IdentityProviderStub {
    /// subject_id -> (identité, mot de passe)
    pub identities: Arc<Mutex<HashMap<SubjectId, (Identity, String)>>>,
    pub deleted: Arc<Mutex<Vec<SubjectId>>>,
    pub next_id: Arc<Mutex<u64>>,

    pub create_error: Arc<Mutex<Option<DomainError>>>,
    pub update_error: Arc<Mutex<Option<DomainError>>>,
    pub sign_in_error: Arc<Mutex<Option<DomainError>>>,
    pub delete_error: Arc<Mutex<Option<DomainError>>>,
}

impl IdentityProviderStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une identité existante (ex: compte orphelin sans profil)
    pub fn add_identity(&self, identity: Identity, password: &str) {
        self.identities
            .lock()
            .unwrap()
            .insert(identity.subject_id().clone(), (identity, password.to_string()));
    }

    pub fn count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }

    pub fn was_deleted(&self, subject_id: &SubjectId) -> bool {
        self.deleted.lock().unwrap().contains(subject_id)
    }

    fn check(slot: &Mutex<Option<DomainError>>) -> Result<()> {
        if let Some(err) = slot.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    fn credential() -> IdentityCredential {
        IdentityCredential::new("stub-token", Utc::now() + Duration::hours(1))
    }
}

#[async_trait]
impl IdentityProvider for IdentityProviderStub {
    async fn create_identity(&self, email: &Email, password: &Password) -> Result<Identity> {
        Self::check(&self.create_error)?;

        let mut identities = self.identities.lock().unwrap();
        if identities.values().any(|(i, _)| i.email() == email) {
            return Err(DomainError::AlreadyExists {
                entity: "Identity",
                field: "email",
                value: email.to_string(),
            });
        }

        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let identity = Identity::new(SubjectId::from_raw(format!("uid-{}", *next)), email.clone())
            .with_credential(Self::credential());

        identities.insert(identity.subject_id().clone(), (identity.clone(), password.expose().to_string()));
        Ok(identity)
    }

    async fn update_identity_profile(
        &self,
        identity: &Identity,
        display_name: &DisplayName,
        avatar_url: &AvatarUrl,
    ) -> Result<Identity> {
        Self::check(&self.update_error)?;
        let updated = identity.clone().with_profile(Some(display_name.clone()), Some(avatar_url.clone()));
        if let Some(entry) = self.identities.lock().unwrap().get_mut(identity.subject_id()) {
            entry.0 = updated.clone();
        }
        Ok(updated)
    }

    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity> {
        Self::check(&self.sign_in_error)?;
        self.identities
            .lock()
            .unwrap()
            .values()
            .find(|(i, p)| i.email() == email && p == password.expose())
            .map(|(i, _)| i.clone().with_credential(Self::credential()))
            .ok_or_else(|| DomainError::Unauthorized { reason: "Invalid email or password".into() })
    }

    async fn reauthenticate(&self, identity: &Identity, password: &Password) -> Result<Identity> {
        self.sign_in(identity.email(), password).await
    }

    async fn delete_identity(&self, identity: &Identity) -> Result<()> {
        Self::check(&self.delete_error)?;
        self.identities.lock().unwrap().remove(identity.subject_id());
        self.deleted.lock().unwrap().push(identity.subject_id().clone());
        Ok(())
    }
}
