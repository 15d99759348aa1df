// crates/account/src/domain/ports/identity_provider.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Identity;
use crate::domain::value_objects::{AvatarUrl, DisplayName, Email, Password};

/// Fournisseur d'identité externe.
///
/// Chaque appel est committé immédiatement côté fournisseur : aucune
/// opération ne participe aux transactions du store documentaire.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `AlreadyExists` si l'email est déjà enregistré,
    /// `Validation` si le mot de passe ne respecte pas la politique
    async fn create_identity(&self, email: &Email, password: &Password) -> Result<Identity>;

    async fn update_identity_profile(
        &self,
        identity: &Identity,
        display_name: &DisplayName,
        avatar_url: &AvatarUrl,
    ) -> Result<Identity>;

    /// `Unauthorized` si les identifiants sont invalides
    async fn sign_in(&self, email: &Email, password: &Password) -> Result<Identity>;

    /// Ré-authentification préalable aux opérations sensibles
    async fn reauthenticate(&self, identity: &Identity, password: &Password) -> Result<Identity>;

    async fn delete_identity(&self, identity: &Identity) -> Result<()>;
}
