//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Create post request
///
/// Content is trimmed and character-counted by the domain layer; the validator
/// bound only rejects grossly oversized payloads early.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    /// Emotion tag ID (Snowflake as string)
    #[validate(length(min = 1, message = "Emotion tag is required"))]
    pub emotion_tag_id: String,
}

/// Toggle stamp request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleStampRequest {
    /// Short reaction key, e.g. "+1" or "heart"
    #[validate(length(min = 1, max = 32, message = "Stamp kind must be 1-32 characters"))]
    pub kind: String,

    /// The emoji glyph the client renders for this kind
    #[validate(length(min = 1, max = 16, message = "Stamp glyph must be 1-16 characters"))]
    pub native: String,
}

/// Save push subscription request
///
/// The subscription object is the browser's PushSubscription JSON, stored
/// opaquely per identity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SavePushSubscriptionRequest {
    pub subscription: serde_json::Value,
}

/// Query parameters for listing posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsParams {
    /// Restrict to a single emotion tag (Snowflake as string)
    pub emotion_tag_id: Option<String>,

    /// Sort direction: "asc" or "desc" (defaults to "desc")
    pub order: Option<String>,

    /// Inclusive resume cursor from a previous page
    pub cursor: Option<String>,

    /// Page size (defaults to 20, capped at 100)
    pub limit: Option<i64>,
}
