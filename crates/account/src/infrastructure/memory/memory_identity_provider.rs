// crates/account/src/infrastructure/memory/memory_identity_provider.rs

use std::collections::HashMap;
use std::hash::Hasher;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Duration;
use seahash::SeaHasher;
use tokio::sync::Mutex;
use uuid::Uuid;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Identity, IdentityCredential};
use crate::domain::ports::IdentityProvider;
use crate::domain::value_objects::{AvatarUrl, DisplayName, Email, Password, SubjectId};

struct StoredIdentity {
    identity: Identity,
    salt: u64,
    /// Empreinte non cryptographique : émulateur local uniquement
    password_fingerprint: u64,
}

#[derive(Default)]
struct Faults {
    create: Option<DomainError>,
    delete: Option<DomainError>,
}

/// Fournisseur d'identité en mémoire, avec la sémantique de l'émulateur :
/// email unique, vérification du mot de passe, jetons valables une heure.
pub struct MemoryIdentityProvider {
    identities: Mutex<HashMap<SubjectId, StoredIdentity>>,
    faults: Mutex<Faults>,
    clock: Arc<dyn Clock>,
}

impl MemoryIdentityProvider {
    pub const TOKEN_TTL_SECS: i64 = 3600;

    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
            faults: Mutex::new(Faults::default()),
            clock,
        }
    }

    /// Le prochain `create_identity` échouera avec `error`
    pub async fn fail_next_create(&self, error: DomainError) {
        self.faults.lock().await.create = Some(error);
    }

    /// Le prochain `delete_identity` échouera avec `error`
    pub async fn fail_next_delete(&self, error: DomainError) {
        self.faults.lock().await.delete = Some(error);
    }

    pub async fn contains(&self, subject_id: &SubjectId) -> bool {
        self.identities.lock().await.contains_key(subject_id)
    }

    pub async fn count(&self) -> usize {
        self.identities.lock().await.len()
    }

    fn fingerprint(salt: u64, password: &Password) -> u64 {
        let mut hasher = SeaHasher::new();
        hasher.write_u64(salt);
        hasher.write(password.expose().as_bytes());
        hasher.finish()
    }

    fn issue_credential(&self) -> IdentityCredential {
        IdentityCredential::new(
            Uuid::new_v4().to_string(),
            self.clock.now() + Duration::seconds(Self::TOKEN_TTL_SECS),
        )
    }

    fn invalid_credentials() -> DomainError {
        DomainError::Unauthorized {
            reason: "Invalid email or password".into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_identity(&self, email: &Email, password: &Password) -> Result<Identity> {
        if let Some(err) = self.faults.lock().await.create.take() {
            return Err(err);
        }

        let mut identities = self.identities.lock().await;
        if identities.values().any(|s| s.identity.email() == email) {
            return Err(DomainError::AlreadyExists {
                entity: "Identity",
                field: "email",
                value: email.to_string(),
            });
        }

        let subject_id = SubjectId::from_raw(Uuid::new_v4().simple().to_string());
        let salt = rand::random::<u64>();
        let identity = Identity::new(subject_id.clone(), email.clone());

        identities.insert(
            subject_id,
            StoredIdentity {
                identity: identity.clone(),
                salt,
                password_fingerprint: Self::fingerprint(salt, password),
            },
        );

        Ok(identity.with_credential(self.issue_credential()))
    }

    async fn update_identity_profile(
        &self,
        identity: &Identity,
        display_name: &DisplayName,
        avatar_url: &AvatarUrl,
    ) -> Result<Identity> {
        let mut identities = self.identities.lock().await;
        let stored = identities
            .get_mut(identity.subject_id())
            .ok_or_else(|| DomainError::NotFound {
                entity: "Identity",
                id: identity.subject_id().to_string(),
            })?;

        stored.identity = stored
            .identity
            .clone()
            .with_profile(Some(display_name.clone()), Some(avatar_url.clone()));

        let mut updated = stored.identity.clone();
        if let Some(credential) = identity.credential() {
            updated = updated.with_credential(credential.clone());
        }
        Ok(updated)
    }

    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity> {
        let identities = self.identities.lock().await;
        let stored = identities
            .values()
            .find(|s| s.identity.email() == email)
            .ok_or_else(Self::invalid_credentials)?;

        if Self::fingerprint(stored.salt, password) != stored.password_fingerprint {
            return Err(Self::invalid_credentials());
        }

        Ok(stored.identity.clone().with_credential(self.issue_credential()))
    }

    async fn reauthenticate(&self, identity: &Identity, password: &Password) -> Result<Identity> {
        let refreshed = self.sign_in(identity.email(), password).await?;
        if refreshed.subject_id() != identity.subject_id() {
            return Err(Self::invalid_credentials());
        }
        Ok(refreshed)
    }

    async fn delete_identity(&self, identity: &Identity) -> Result<()> {
        if let Some(err) = self.faults.lock().await.delete.take() {
            return Err(err);
        }

        // Suppression d'une identité absente : déjà compensée
        self.identities.lock().await.remove(identity.subject_id());
        Ok(())
    }
}
