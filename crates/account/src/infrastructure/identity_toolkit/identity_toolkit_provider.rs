// crates/account/src/infrastructure/identity_toolkit/identity_toolkit_provider.rs

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Identity, IdentityCredential};
use crate::domain::ports::IdentityProvider;
use crate::domain::value_objects::{AvatarUrl, DisplayName, Email, Password, SubjectId};
use crate::infrastructure::identity_toolkit::identity_toolkit_error_mapper::map_provider_error;
use crate::infrastructure::identity_toolkit::identity_toolkit_payloads::{
    AccountResponse, DeleteRequest, ErrorEnvelope, PasswordRequest, UpdateProfileRequest,
};
use crate::infrastructure::identity_toolkit::IdentityToolkitConfig;

/// Client REST du fournisseur d'identité (API `accounts:*`, compatible émulateur)
pub struct IdentityToolkitProvider {
    config: IdentityToolkitConfig,
    http_client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl IdentityToolkitProvider {
    pub fn new(config: IdentityToolkitConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Infrastructure(format!("HTTP client init failed: {}", e)))?;

        Ok(Self { config, http_client, clock })
    }

    async fn call<B, R>(&self, method: &str, body: &B, email: Option<&str>) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let resp = self
            .http_client
            .post(self.config.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Identity provider unreachable ({}): {}", method, e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let envelope: Option<ErrorEnvelope> = resp.json().await.ok();

            return Err(match envelope {
                Some(env) => {
                    tracing::debug!(method, code = env.error.code, message = %env.error.message, "Identity provider rejected call");
                    map_provider_error(&env.error.message, email)
                }
                None => DomainError::Infrastructure(format!("Identity provider {} failed: {}", method, status)),
            });
        }

        resp.json::<R>()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Identity provider {} parse failed: {}", method, e)))
    }

    fn to_identity(&self, resp: AccountResponse) -> Result<Identity> {
        let subject_id = SubjectId::try_new(resp.local_id)?;
        let email = Email::try_new(resp.email)?;

        // Données facultatives : une valeur invalide est ignorée plutôt que bloquante
        let display_name = resp.display_name.and_then(|n| DisplayName::try_new(n).ok());
        let avatar_url = resp.photo_url.and_then(|u| AvatarUrl::try_new(u).ok());

        let mut identity = Identity::new(subject_id, email).with_profile(display_name, avatar_url);

        if let Some(token) = resp.id_token {
            let ttl = resp
                .expires_in
                .as_deref()
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(3600);
            identity = identity.with_credential(IdentityCredential::new(token, self.clock.now() + Duration::seconds(ttl)));
        }

        Ok(identity)
    }

    async fn discard_unusable_identity(&self, local_id: &str, id_token: Option<&str>, reason: &DomainError) {
        let outcome = match id_token {
            Some(id_token) => self
                .call::<_, serde_json::Value>("delete", &DeleteRequest { id_token }, None)
                .await
                .map(|_| ()),
            None => Err(DomainError::Infrastructure("signUp returned no idToken".into())),
        };

        match outcome {
            Ok(()) => tracing::warn!(
                local_id,
                reason = %reason,
                "⚠️ Unusable identity returned by signUp, deleted at provider"
            ),
            Err(cleanup) => tracing::error!(
                local_id,
                reason = %reason,
                cleanup_error = %cleanup,
                manual_intervention = true,
                "🚨 CRITICAL: Unusable identity left at provider. Manual cleanup required"
            ),
        }
    }

    fn id_token(identity: &Identity) -> Result<&str> {
        identity
            .credential()
            .map(|c| c.id_token())
            .ok_or_else(|| DomainError::Unauthorized {
                reason: "Identity has no active credential".into(),
            })
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    async fn create_identity(&self, email: &Email, password: &Password) -> Result<Identity> {
        let body = PasswordRequest {
            email: email.as_str(),
            password: password.expose(),
            return_secure_token: true,
        };
        let resp: AccountResponse = self.call("signUp", &body, Some(email.as_str())).await?;
        let local_id = resp.local_id.clone();
        let id_token = resp.id_token.clone();

        match self.to_identity(resp) {
            Ok(identity) => Ok(identity),
            Err(e) => {
                // Le compte existe déjà chez le fournisseur : l'appelant ne pourra pas compenser
                self.discard_unusable_identity(&local_id, id_token.as_deref(), &e).await;
                Err(e)
            }
        }
    }

    async fn update_identity_profile(
        &self,
        identity: &Identity,
        display_name: &DisplayName,
        avatar_url: &AvatarUrl,
    ) -> Result<Identity> {
        let body = UpdateProfileRequest {
            id_token: Self::id_token(identity)?,
            display_name: display_name.as_str(),
            photo_url: avatar_url.as_str(),
            return_secure_token: true,
        };
        let resp: AccountResponse = self.call("update", &body, None).await?;
        let updated = self.to_identity(resp)?;

        // `update` ne renvoie pas toujours de nouveau jeton
        match (updated.credential(), identity.credential()) {
            (None, Some(previous)) => Ok(updated.with_credential(previous.clone())),
            _ => Ok(updated),
        }
    }

    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity> {
        let body = PasswordRequest {
            email: email.as_str(),
            password: password.expose(),
            return_secure_token: true,
        };
        let resp: AccountResponse = self.call("signInWithPassword", &body, Some(email.as_str())).await?;
        self.to_identity(resp)
    }

    async fn reauthenticate(&self, identity: &Identity, password: &Password) -> Result<Identity> {
        let refreshed = self.sign_in(identity.email(), password).await?;
        if refreshed.subject_id() != identity.subject_id() {
            return Err(DomainError::Unauthorized {
                reason: "Credentials belong to another account".into(),
            });
        }
        Ok(refreshed)
    }

    async fn delete_identity(&self, identity: &Identity) -> Result<()> {
        let body = DeleteRequest { id_token: Self::id_token(identity)? };
        let _: serde_json::Value = self.call("delete", &body, None).await?;
        tracing::info!(subject_id = %identity.subject_id(), "Identity deleted at provider");
        Ok(())
    }
}
