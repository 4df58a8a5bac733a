//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in vent-core.
//! Each repository handles database operations for a specific domain entity.

mod emotion_tag;
mod error;
mod post;
mod push_subscription;
mod stamp;
mod tombstone;

pub use emotion_tag::PgEmotionTagRepository;
pub use post::PgPostRepository;
pub use push_subscription::PgPushSubscriptionRepository;
pub use stamp::PgStampRepository;
pub use tombstone::PgTombstoneRepository;
