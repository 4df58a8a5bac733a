//! Push subscription database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the push_subscriptions table
#[derive(Debug, Clone, FromRow)]
pub struct PushSubscriptionModel {
    pub author_identity: String,
    pub payload: String,
    pub updated_at: DateTime<Utc>,
}
