// crates/account/src/domain/builders/user_profile_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Counter;
use crate::domain::entities::UserProfile;
use crate::domain::value_objects::{AvatarUrl, Country, DisplayName, Email, Handle, SubjectId};

pub struct UserProfileBuilder {
    subject_id: SubjectId,
    display_name: DisplayName,
    handle: Handle,
    email: Email,
    avatar_url: Option<AvatarUrl>,
    country: Option<Country>,
    created_at: Option<DateTime<Utc>>,
}

impl UserProfileBuilder {
    /// Chemin 1 : CRÉATION (inscription)
    pub fn new(subject_id: SubjectId, display_name: DisplayName, handle: Handle, email: Email) -> Self {
        Self {
            subject_id,
            display_name,
            handle,
            email,
            avatar_url: None,
            country: None,
            created_at: None,
        }
    }

    /// Chemin 2 : RESTAURATION (repositories), sans valeur par défaut
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        subject_id: SubjectId,
        display_name: DisplayName,
        handle: Handle,
        email: Email,
        avatar_url: Option<AvatarUrl>,
        country: Country,
        redeemed_gift_codes: Counter,
        redeemed_think_codes: Counter,
        created_at: DateTime<Utc>,
    ) -> UserProfile {
        UserProfile {
            subject_id,
            display_name,
            handle,
            email,
            avatar_url,
            country,
            redeemed_gift_codes,
            redeemed_think_codes,
            created_at,
        }
    }

    pub fn with_avatar(mut self, avatar_url: AvatarUrl) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Compteurs toujours à zéro à la création
    pub fn build(self) -> UserProfile {
        UserProfile {
            subject_id: self.subject_id,
            display_name: self.display_name,
            handle: self.handle,
            email: self.email,
            avatar_url: self.avatar_url,
            country: self.country.unwrap_or_default(),
            redeemed_gift_codes: Counter::zero(),
            redeemed_think_codes: Counter::zero(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
