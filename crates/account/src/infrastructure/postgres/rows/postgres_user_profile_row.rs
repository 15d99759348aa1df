// crates/account/src/infrastructure/postgres/rows/postgres_user_profile_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Counter;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::builders::UserProfileBuilder;
use crate::domain::entities::UserProfile;
use crate::domain::value_objects::{AvatarUrl, Country, DisplayName, Email, Handle, SubjectId};

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresUserProfileRow {
    pub subject_id: String,
    pub display_name: String,
    pub handle: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub country: String,
    pub redeemed_gift_codes: i64,
    pub redeemed_think_codes: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostgresUserProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: PostgresUserProfileRow) -> Result<Self> {
        Ok(UserProfileBuilder::restore(
            SubjectId::from_raw(row.subject_id),
            DisplayName::from_raw(row.display_name),
            Handle::from_raw(row.handle),
            Email::from_raw(row.email),
            row.avatar_url.map(AvatarUrl::from_raw),
            Country::from_raw(row.country),
            Counter::try_from_i64("redeemed_gift_codes", row.redeemed_gift_codes)?,
            Counter::try_from_i64("redeemed_think_codes", row.redeemed_think_codes)?,
            row.created_at,
        ))
    }
}

impl From<&UserProfile> for PostgresUserProfileRow {
    fn from(profile: &UserProfile) -> Self {
        Self {
            subject_id: profile.subject_id().to_string(),
            display_name: profile.display_name().to_string(),
            handle: profile.handle().to_string(),
            email: profile.email().to_string(),
            avatar_url: profile.avatar_url().map(|a| a.to_string()),
            country: profile.country().as_str().to_string(),
            // Compteurs bornés par BIGINT
            redeemed_gift_codes: i64::try_from(profile.redeemed_gift_codes().value()).unwrap_or(i64::MAX),
            redeemed_think_codes: i64::try_from(profile.redeemed_think_codes().value()).unwrap_or(i64::MAX),
            created_at: profile.created_at(),
        }
    }
}
