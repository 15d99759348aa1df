// crates/account/src/domain/entities/user_profile.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::Counter;

use crate::domain::builders::UserProfileBuilder;
use crate::domain::value_objects::{AvatarUrl, Country, DisplayName, Email, Handle, SubjectId};

/// Profil public d'un compte, document `users/{subject_id}`.
///
/// Créé une seule fois à l'inscription, dans la même unité atomique
/// que sa [`HandleReservation`](super::HandleReservation).
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub(crate) subject_id: SubjectId,
    pub(crate) display_name: DisplayName,
    pub(crate) handle: Handle,
    pub(crate) email: Email,
    pub(crate) avatar_url: Option<AvatarUrl>,
    pub(crate) country: Country,
    pub(crate) redeemed_gift_codes: Counter,
    pub(crate) redeemed_think_codes: Counter,
    pub(crate) created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn builder(
        subject_id: SubjectId,
        display_name: DisplayName,
        handle: Handle,
        email: Email,
    ) -> UserProfileBuilder {
        UserProfileBuilder::new(subject_id, display_name, handle, email)
    }

    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn avatar_url(&self) -> Option<&AvatarUrl> {
        self.avatar_url.as_ref()
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn redeemed_gift_codes(&self) -> Counter {
        self.redeemed_gift_codes
    }

    pub fn redeemed_think_codes(&self) -> Counter {
        self.redeemed_think_codes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl EntityMetadata for UserProfile {
    fn entity_name() -> &'static str {
        "UserProfile"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "users_pkey" => "subject_id",
            _ => "unique_constraint",
        }
    }
}
