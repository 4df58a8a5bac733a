//! Client error types

/// Errors surfaced by the API client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with an error body
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body could not be decoded
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Stable error code, when the server supplied one
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether this failure came from a business rule rather than infrastructure
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self.code(),
            Some("DAILY_LIMIT_EXCEEDED" | "REPOST_AFTER_DELETE" | "NOT_POST_AUTHOR")
        )
    }

    /// Whether the server reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
