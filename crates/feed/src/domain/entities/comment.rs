// crates/feed/src/domain/entities/comment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::value_objects::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub author_id: AuthorId,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
