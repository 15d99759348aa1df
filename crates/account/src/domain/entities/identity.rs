// crates/account/src/domain/entities/identity.rs

use std::fmt;
use chrono::{DateTime, Utc};
use crate::domain::value_objects::{AvatarUrl, DisplayName, Email, SubjectId};

/// Jeton émis par le fournisseur d'identité après authentification
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityCredential {
    id_token: String,
    expires_at: DateTime<Utc>,
}

impl IdentityCredential {
    pub fn new(id_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self { id_token: id_token.into(), expires_at }
    }

    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl fmt::Debug for IdentityCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityCredential")
            .field("id_token", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Identité d'authentification, racine du compte.
/// Le profil et la réservation ne doivent jamais lui survivre.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    subject_id: SubjectId,
    email: Email,
    display_name: Option<DisplayName>,
    avatar_url: Option<AvatarUrl>,
    credential: Option<IdentityCredential>,
}

impl Identity {
    pub fn new(subject_id: SubjectId, email: Email) -> Self {
        Self {
            subject_id,
            email,
            display_name: None,
            avatar_url: None,
            credential: None,
        }
    }

    pub fn with_profile(mut self, display_name: Option<DisplayName>, avatar_url: Option<AvatarUrl>) -> Self {
        self.display_name = display_name;
        self.avatar_url = avatar_url;
        self
    }

    pub fn with_credential(mut self, credential: IdentityCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn display_name(&self) -> Option<&DisplayName> {
        self.display_name.as_ref()
    }

    pub fn avatar_url(&self) -> Option<&AvatarUrl> {
        self.avatar_url.as_ref()
    }

    pub fn credential(&self) -> Option<&IdentityCredential> {
        self.credential.as_ref()
    }
}
