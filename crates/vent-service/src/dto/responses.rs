//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Emotion tag response with catalog rendering data
#[derive(Debug, Clone, Serialize)]
pub struct EmotionTagResponse {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
}

/// Stamp response
#[derive(Debug, Clone, Serialize)]
pub struct StampResponse {
    pub id: String,
    pub kind: String,
    pub native: String,
    /// Whether the requesting identity placed this stamp
    pub mine: bool,
}

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub content: String,
    pub emotion_tag: EmotionTagResponse,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub stamps: Vec<StampResponse>,
    /// Whether the requesting identity authored this post
    pub mine: bool,
}

/// Paginated post listing
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    /// Inclusive cursor for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
