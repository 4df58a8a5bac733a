//! Push subscription entity - one web-push subscription blob per identity

use chrono::{DateTime, Utc};

use crate::value_objects::ClientIdentity;

/// Push subscription entity
///
/// The payload is the browser's serialized PushSubscription JSON; the server
/// stores it opaquely. One row per identity, upserted on subscribe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSubscription {
    pub author_identity: ClientIdentity,
    pub payload: String,
    pub updated_at: DateTime<Utc>,
}

impl PushSubscription {
    /// Create a new PushSubscription
    pub fn new(author_identity: ClientIdentity, payload: String) -> Self {
        Self {
            author_identity,
            payload,
            updated_at: Utc::now(),
        }
    }
}
