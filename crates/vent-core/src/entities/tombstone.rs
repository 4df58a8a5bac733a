//! Deleted-post tombstone
//!
//! A tombstone records that an identity deleted its post; its existence blocks
//! a new post from that identity for the remainder of the calendar day of
//! `deleted_at`. Tombstones are never updated and may be garbage-collected
//! once their day has passed.

use chrono::{DateTime, Utc};

use crate::value_objects::{ClientIdentity, Snowflake};

/// Deletion tombstone entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedPost {
    pub id: Snowflake,
    pub author_identity: ClientIdentity,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedPost {
    /// Create a tombstone for a deletion happening now
    pub fn new(id: Snowflake, author_identity: ClientIdentity) -> Self {
        Self {
            id,
            author_identity,
            deleted_at: Utc::now(),
        }
    }
}
