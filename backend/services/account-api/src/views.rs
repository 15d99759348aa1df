// backend/services/account-api/src/views.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use account::domain::entities::{Session, UserProfile};
use feed::domain::entities::{Comment, Post};
use feed::domain::value_objects::MediaType;

/// Profil public : l'email n'est jamais exposé
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub uid: String,
    pub username: String,
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub country: String,
    pub redeemed_gift_codes: u64,
    pub redeemed_think_codes: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            uid: profile.subject_id().as_str().to_string(),
            username: profile.handle().as_str().to_string(),
            name: profile.display_name().as_str().to_string(),
            photo_url: profile.avatar_url().map(|u| u.as_str().to_string()),
            country: profile.country().as_str().to_string(),
            redeemed_gift_codes: profile.redeemed_gift_codes().value(),
            redeemed_think_codes: profile.redeemed_think_codes().value(),
            created_at: profile.created_at(),
        }
    }
}

/// Session établie : jeton à renvoyer en `Authorization: Bearer`.
/// Sans profil, les champs retombent sur la vue provisoire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub token: String,
    pub uid: String,
    pub email: String,
    pub name: String,
    pub username: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub redeemed_gift_codes: u64,
    pub redeemed_think_codes: u64,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token().to_string(),
            uid: session.subject_id().as_str().to_string(),
            email: session.identity().email().as_str().to_string(),
            name: session.display_name().to_string(),
            username: session.handle().map(|h| h.as_str().to_string()),
            photo_url: session.avatar_url().map(|u| u.as_str().to_string()),
            redeemed_gift_codes: session.redeemed_gift_codes().value(),
            redeemed_think_codes: session.redeemed_think_codes().value(),
            expires_at: session.expires_at(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredView {
    pub profile: ProfileView,
    /// Absente si l'enregistrement de session a échoué après l'inscription
    pub session: Option<SessionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(rename = "authorPhotoURL")]
    pub author_photo_url: String,
    pub content: String,
    #[serde(rename = "mediaURL")]
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            author_id: post.author().id().as_str().to_string(),
            author_name: post.author().name().to_string(),
            author_photo_url: post.author().avatar_url().to_string(),
            content: post.content().as_str().to_string(),
            media_url: post.media().map(|m| m.url().to_string()),
            media_type: post.media().and_then(|m| m.media_type()),
            likes: post.likes().iter().map(|l| l.as_str().to_string()).collect(),
            comments: post.comments().to_vec(),
            timestamp: post.created_at(),
        }
    }
}
