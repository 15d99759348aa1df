// crates/account/src/infrastructure/memory/documents.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Counter;

use crate::domain::builders::UserProfileBuilder;
use crate::domain::entities::{HandleReservation, UserProfile};
use crate::domain::value_objects::{AvatarUrl, Country, DisplayName, Email, Handle, SubjectId};

pub const USERS: &str = "users";
pub const USERNAMES: &str = "usernames";

/// Forme du document `users/{uid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub uid: String,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub redeemed_gift_codes: u64,
    #[serde(default)]
    pub redeemed_think_codes: u64,
    pub created_at: DateTime<Utc>,
}

/// Forme du document `usernames/{handle}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameDocument {
    pub uid: String,
}

impl From<&UserProfile> for UserDocument {
    fn from(profile: &UserProfile) -> Self {
        Self {
            uid: profile.subject_id().to_string(),
            name: profile.display_name().to_string(),
            username: profile.handle().to_string(),
            email: profile.email().to_string(),
            photo_url: profile.avatar_url().map(|a| a.to_string()),
            country: profile.country().as_str().to_string(),
            redeemed_gift_codes: profile.redeemed_gift_codes().value(),
            redeemed_think_codes: profile.redeemed_think_codes().value(),
            created_at: profile.created_at(),
        }
    }
}

impl From<UserDocument> for UserProfile {
    fn from(doc: UserDocument) -> Self {
        UserProfileBuilder::restore(
            SubjectId::from_raw(doc.uid),
            DisplayName::from_raw(doc.name),
            Handle::from_raw(doc.username),
            Email::from_raw(doc.email),
            doc.photo_url.map(AvatarUrl::from_raw),
            Country::from_raw(doc.country),
            Counter::from_raw(doc.redeemed_gift_codes),
            Counter::from_raw(doc.redeemed_think_codes),
            doc.created_at,
        )
    }
}

impl UsernameDocument {
    pub fn into_reservation(self, handle: &Handle) -> HandleReservation {
        HandleReservation::new(handle.clone(), SubjectId::from_raw(self.uid))
    }
}

impl From<&HandleReservation> for UsernameDocument {
    fn from(reservation: &HandleReservation) -> Self {
        Self { uid: reservation.owner().to_string() }
    }
}
