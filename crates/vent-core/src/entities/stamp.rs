//! Stamp entity - a toggleable emoji reaction on a post

use chrono::{DateTime, Utc};

use crate::value_objects::{ClientIdentity, Snowflake};

/// Stamp entity
///
/// Unique per (post_id, author_identity, kind); a second identical stamp from
/// the same identity removes the first instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_identity: ClientIdentity,
    /// Short reaction key, e.g. "+1" or "heart"
    pub kind: String,
    /// The emoji glyph rendered for this stamp
    pub native: String,
    pub created_at: DateTime<Utc>,
}

impl Stamp {
    /// Create a new Stamp
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        author_identity: ClientIdentity,
        kind: String,
        native: String,
    ) -> Self {
        Self {
            id,
            post_id,
            author_identity,
            kind,
            native,
            created_at: Utc::now(),
        }
    }

    /// Check whether this stamp matches a toggle request
    #[inline]
    pub fn matches(&self, post_id: Snowflake, identity: &ClientIdentity, kind: &str) -> bool {
        self.post_id == post_id && &self.author_identity == identity && self.kind == kind
    }
}
