//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub content: String,
    pub emotion_tag_id: i64,
    pub author_identity: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
