//! Wire models for the API surface
//!
//! These mirror the server's JSON shapes. IDs are strings on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emotion tag with rendering data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTag {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
}

/// Stamp attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub id: String,
    pub kind: String,
    pub native: String,
    /// Whether this session's identity placed the stamp
    pub mine: bool,
}

/// Post with its tag and current stamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub emotion_tag: EmotionTag,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub stamps: Vec<Stamp>,
    /// Whether this session's identity authored the post
    pub mine: bool,
}

/// One page of a post listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Body for `POST /posts`
#[derive(Debug, Serialize)]
pub struct CreatePostBody {
    pub content: String,
    pub emotion_tag_id: String,
}

/// Body for `POST /posts/{id}/stamps`
#[derive(Debug, Serialize)]
pub struct ToggleStampBody {
    pub kind: String,
    pub native: String,
}

/// Body for `PUT /notifications/subscription`
#[derive(Debug, Serialize)]
pub struct SubscriptionBody {
    pub subscription: serde_json::Value,
}

/// Echoed identity from `GET /identity`
#[derive(Debug, Deserialize)]
pub struct ClientIdBody {
    pub client_id: String,
}

/// Error envelope returned by the server
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail within the envelope
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
