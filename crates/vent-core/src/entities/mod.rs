//! Domain entities

pub mod emotion_tag;
pub mod post;
pub mod push_subscription;
pub mod stamp;
pub mod tombstone;

pub use emotion_tag::{catalog_lookup, CatalogEntry, EmotionTag, DEFAULT_EMOTION, EMOTION_CATALOG};
pub use post::Post;
pub use push_subscription::PushSubscription;
pub use stamp::Stamp;
pub use tombstone::DeletedPost;
