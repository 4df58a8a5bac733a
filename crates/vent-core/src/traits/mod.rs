//! Repository traits implemented by the persistence layer

pub mod repositories;

pub use repositories::{
    EmotionTagRepository, PostQuery, PostRepository, PushSubscriptionRepository, RepoResult,
    SortOrder, StampRepository, TombstoneRepository,
};
