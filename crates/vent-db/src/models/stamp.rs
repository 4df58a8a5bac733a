//! Stamp database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the stamps table
#[derive(Debug, Clone, FromRow)]
pub struct StampModel {
    pub id: i64,
    pub post_id: i64,
    pub author_identity: String,
    pub kind: String,
    pub native: String,
    pub created_at: DateTime<Utc>,
}
