//! Database models - SQLx-compatible structs for PostgreSQL tables

mod emotion_tag;
mod post;
mod push_subscription;
mod stamp;
mod tombstone;

pub use emotion_tag::EmotionTagModel;
pub use post::PostModel;
pub use push_subscription::PushSubscriptionModel;
pub use stamp::StampModel;
pub use tombstone::DeletedPostModel;
