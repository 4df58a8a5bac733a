//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Emotion tag not found: {0}")]
    EmotionTagNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Post content must not be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid client identity: {0}")]
    InvalidIdentity(String),

    // =========================================================================
    // Posting Rule Violations
    // =========================================================================
    #[error("Already posted today; one post per day is allowed")]
    DailyLimitExceeded,

    #[error("A post was deleted today; posting again is blocked until tomorrow")]
    RepostAfterDeleteBlocked,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the post author")]
    NotPostAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::EmotionTagNotFound(_) => "UNKNOWN_EMOTION_TAG",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidIdentity(_) => "INVALID_IDENTITY",

            // Posting rules
            Self::DailyLimitExceeded => "DAILY_LIMIT_EXCEEDED",
            Self::RepostAfterDeleteBlocked => "REPOST_AFTER_DELETE",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::EmotionTagNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyContent
                | Self::ContentTooLong { .. }
                | Self::InvalidIdentity(_)
        )
    }

    /// Check if this error should be rejected as forbidden (403)
    ///
    /// Covers both the authorization check and the same-day posting rules;
    /// each still carries its own distinguishable code.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::DailyLimitExceeded | Self::RepostAfterDeleteBlocked | Self::NotPostAuthor
        )
    }
}
