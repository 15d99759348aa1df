// crates/account/src/domain/entities/session.rs

use chrono::{DateTime, Duration, Utc};
use shared_kernel::domain::value_objects::Counter;

use crate::domain::entities::{Identity, UserProfile};
use crate::domain::value_objects::{AvatarUrl, Handle, SessionToken, SubjectId};

/// Nom affiché quand ni le profil ni l'identité n'en fournissent un
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous";

/// Utilisateur courant, passé explicitement aux cas d'usage.
///
/// Établie à la connexion (ou à l'inscription), effacée à la déconnexion
/// ou à l'expiration signalée par le fournisseur.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: SessionToken,
    identity: Identity,
    profile: Option<UserProfile>,
    established_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    /// L'expiration suit celle du jeton fournisseur quand il existe
    pub fn establish(identity: Identity, profile: Option<UserProfile>, now: DateTime<Utc>) -> Self {
        let expires_at = identity
            .credential()
            .map(|c| c.expires_at())
            .unwrap_or(now + Duration::seconds(Self::DEFAULT_TTL_SECS));

        Self {
            token: SessionToken::generate(),
            identity,
            profile,
            established_at: now,
            expires_at,
        }
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn subject_id(&self) -> &SubjectId {
        self.identity.subject_id()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    // --- VUE PROVISOIRE (profil absent) ---

    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.display_name().as_str())
            .or_else(|| self.identity.display_name().map(|n| n.as_str()))
            .unwrap_or(ANONYMOUS_DISPLAY_NAME)
    }

    pub fn avatar_url(&self) -> Option<&AvatarUrl> {
        self.profile
            .as_ref()
            .and_then(|p| p.avatar_url())
            .or_else(|| self.identity.avatar_url())
    }

    pub fn handle(&self) -> Option<&Handle> {
        self.profile.as_ref().map(|p| p.handle())
    }

    pub fn redeemed_gift_codes(&self) -> Counter {
        self.profile.as_ref().map(|p| p.redeemed_gift_codes()).unwrap_or_default()
    }

    pub fn redeemed_think_codes(&self) -> Counter {
        self.profile.as_ref().map(|p| p.redeemed_think_codes()).unwrap_or_default()
    }
}
