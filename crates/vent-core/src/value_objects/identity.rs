//! Client identity - opaque pseudonymous author token
//!
//! The identity is generated client-side and sent with every request. It is
//! validated for presence and format only and must never be treated as a
//! security boundary: anyone can mint one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted identity length
pub const MAX_IDENTITY_LEN: usize = 64;

/// Opaque per-client identity token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Parse and validate an identity token
    ///
    /// Accepts 1-64 URL-safe characters (alphanumeric, `-`, `_`, `.`).
    pub fn parse(s: &str) -> Result<Self, IdentityParseError> {
        if s.is_empty() {
            return Err(IdentityParseError::Empty);
        }
        if s.len() > MAX_IDENTITY_LEN {
            return Err(IdentityParseError::TooLong);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(IdentityParseError::InvalidCharacter);
        }
        Ok(Self(s.to_string()))
    }

    /// Generate a fresh random identity (UUID v4)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap a value that was already validated at the write path
    /// (e.g. a column read back from the database)
    pub fn new_unchecked(s: String) -> Self {
        Self(s)
    }

    /// Get the token as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClientIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ClientIdentity {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientIdentity::parse(s)
    }
}

/// Error when parsing a client identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityParseError {
    #[error("identity must not be empty")]
    Empty,

    #[error("identity exceeds {MAX_IDENTITY_LEN} characters")]
    TooLong,

    #[error("identity contains non URL-safe characters")]
    InvalidCharacter,
}
