//! Deleted-post tombstone database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the deleted_posts table
#[derive(Debug, Clone, FromRow)]
pub struct DeletedPostModel {
    pub id: i64,
    pub author_identity: String,
    pub deleted_at: DateTime<Utc>,
}
