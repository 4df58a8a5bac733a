//! # vent-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    catalog_lookup, CatalogEntry, DeletedPost, EmotionTag, Post, PushSubscription, Stamp,
    DEFAULT_EMOTION, EMOTION_CATALOG,
};
pub use error::DomainError;
pub use traits::{
    EmotionTagRepository, PostQuery, PostRepository, PushSubscriptionRepository, RepoResult,
    SortOrder, StampRepository, TombstoneRepository,
};
pub use value_objects::{
    ClientIdentity, IdentityParseError, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
