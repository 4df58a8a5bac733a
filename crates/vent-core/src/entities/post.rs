//! Post entity - an anonymous venting message

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::{ClientIdentity, Snowflake};

/// Maximum post content length in characters (after trimming)
pub const MAX_CONTENT_CHARS: usize = 500;

/// How long a post stays visible
pub const POST_TTL_HOURS: i64 = 24;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub content: String,
    pub emotion_tag_id: Snowflake,
    pub author_identity: ClientIdentity,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with expiry set from the creation time
    pub fn new(
        id: Snowflake,
        content: String,
        emotion_tag_id: Snowflake,
        author_identity: ClientIdentity,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            content,
            emotion_tag_id,
            author_identity,
            created_at: now,
            expires_at: now + Duration::hours(POST_TTL_HOURS),
        }
    }

    /// Validate and normalize raw post content
    ///
    /// Trims surrounding whitespace; the trimmed text must be 1-500 characters.
    pub fn validate_content(raw: &str) -> Result<String, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if trimmed.chars().count() > MAX_CONTENT_CHARS {
            return Err(DomainError::ContentTooLong {
                max: MAX_CONTENT_CHARS,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Check whether the post has passed its expiry time
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check whether the given identity authored this post
    #[inline]
    pub fn is_authored_by(&self, identity: &ClientIdentity) -> bool {
        &self.author_identity == identity
    }
}
