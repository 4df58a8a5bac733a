//! Repository trait definitions
//!
//! The domain layer defines the persistence interfaces; `vent-db` provides
//! the PostgreSQL implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{DeletedPost, EmotionTag, Post, PushSubscription, Stamp};
use crate::error::DomainError;
use crate::value_objects::{ClientIdentity, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Sort direction for post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query parameters for listing posts
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Restrict to a single emotion tag
    pub emotion_tag_id: Option<Snowflake>,
    /// Sort direction by post id
    pub order: SortOrder,
    /// Inclusive cursor: the id the page starts at, in sort direction
    pub cursor: Option<Snowflake>,
    /// Maximum number of rows to fetch
    pub limit: i64,
}

/// Post persistence
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a live (non-expired) post by id
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// List live posts matching the query, up to `query.limit` rows
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// Check whether the identity created a post within `[from, to)`
    async fn exists_for_window(
        &self,
        identity: &ClientIdentity,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Persist a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and record its tombstone in one transaction
    async fn delete_with_tombstone(
        &self,
        post_id: Snowflake,
        tombstone: &DeletedPost,
    ) -> RepoResult<()>;
}

/// Deletion tombstone persistence
#[async_trait]
pub trait TombstoneRepository: Send + Sync {
    /// Check whether the identity has a tombstone with `deleted_at` in `[from, to)`
    async fn exists_for_window(
        &self,
        identity: &ClientIdentity,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Remove tombstones older than the cutoff; returns rows deleted.
    /// Storage hygiene only, never required for correctness.
    async fn purge_before(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

/// Stamp persistence
#[async_trait]
pub trait StampRepository: Send + Sync {
    /// Toggle a stamp and return the post's full stamp list after the mutation
    ///
    /// If a stamp matching `(post_id, author_identity, kind)` exists it is
    /// deleted, otherwise `candidate` is inserted. The whole sequence runs in
    /// one transaction so concurrent identical toggles cannot both insert.
    async fn toggle(&self, candidate: &Stamp) -> RepoResult<Vec<Stamp>>;

    /// All stamps on a post, oldest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Stamp>>;
}

/// Emotion tag reference data
#[async_trait]
pub trait EmotionTagRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<EmotionTag>>;

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EmotionTag>>;

    /// Insert catalog entries that are not present yet (matched by name)
    async fn seed(&self, tags: &[EmotionTag]) -> RepoResult<()>;
}

/// Push subscription persistence
#[async_trait]
pub trait PushSubscriptionRepository: Send + Sync {
    /// Insert or replace the identity's subscription
    async fn upsert(&self, subscription: &PushSubscription) -> RepoResult<()>;

    /// Remove the identity's subscription if present
    async fn delete(&self, identity: &ClientIdentity) -> RepoResult<()>;
}
