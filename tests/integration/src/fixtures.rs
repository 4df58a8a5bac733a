//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mint a fresh anonymous identity so each test is isolated from the
/// one-post-per-day rule
pub fn unique_identity() -> String {
    Uuid::new_v4().to_string()
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub emotion_tag_id: String,
}

impl CreatePostRequest {
    pub fn new(content: &str, emotion_tag_id: &str) -> Self {
        Self {
            content: content.to_string(),
            emotion_tag_id: emotion_tag_id.to_string(),
        }
    }
}

/// Toggle stamp request
#[derive(Debug, Serialize)]
pub struct ToggleStampRequest {
    pub kind: String,
    pub native: String,
}

impl ToggleStampRequest {
    pub fn thumbs_up() -> Self {
        Self {
            kind: "thumbs_up".to_string(),
            native: "\u{1f44d}".to_string(),
        }
    }
}

/// Push subscription request
#[derive(Debug, Serialize)]
pub struct SubscriptionRequest {
    pub subscription: serde_json::Value,
}

impl SubscriptionRequest {
    pub fn sample() -> Self {
        Self {
            subscription: serde_json::json!({
                "endpoint": "https://push.example.com/send/abc",
                "keys": {"p256dh": "key", "auth": "auth"}
            }),
        }
    }
}

/// Emotion tag response
#[derive(Debug, Deserialize)]
pub struct EmotionTagResponse {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
}

/// Stamp response
#[derive(Debug, Deserialize)]
pub struct StampResponse {
    pub id: String,
    pub kind: String,
    pub native: String,
    pub mine: bool,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub content: String,
    pub emotion_tag: EmotionTagResponse,
    pub created_at: String,
    pub expires_at: String,
    pub stamps: Vec<StampResponse>,
    pub mine: bool,
}

/// Paginated post listing response
#[derive(Debug, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Echoed identity response
#[derive(Debug, Deserialize)]
pub struct IdentityResponse {
    pub client_id: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
