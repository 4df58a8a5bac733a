//! In-memory repository implementations backing the service tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vent_common::PostRulesConfig;
use vent_core::entities::{DeletedPost, EmotionTag, Post, PushSubscription, Stamp};
use vent_core::traits::{
    EmotionTagRepository, PostQuery, PostRepository, PushSubscriptionRepository, RepoResult,
    SortOrder, StampRepository, TombstoneRepository,
};
use vent_core::value_objects::{ClientIdentity, Snowflake, SnowflakeGenerator};
use vent_core::DomainError;

use super::context::{ServiceContext, ServiceContextBuilder};

/// Shared in-memory backing store
#[derive(Default)]
pub struct MemoryStore {
    pub posts: Mutex<Vec<Post>>,
    pub tombstones: Mutex<Vec<DeletedPost>>,
    pub stamps: Mutex<Vec<Stamp>>,
    pub tags: Mutex<Vec<EmotionTag>>,
    pub subscriptions: Mutex<Vec<PushSubscription>>,
}

/// One repo type implementing every repository trait over the shared store
#[derive(Clone)]
pub struct MemoryRepo(pub Arc<MemoryStore>);

#[async_trait]
impl PostRepository for MemoryRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let now = Utc::now();
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id && !p.is_expired(now))
            .cloned())
    }

    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let now = Utc::now();
        let mut posts: Vec<Post> = self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.is_expired(now))
            .filter(|p| query.emotion_tag_id.is_none_or(|t| p.emotion_tag_id == t))
            .filter(|p| match (query.cursor, query.order) {
                (Some(c), SortOrder::Asc) => p.id >= c,
                (Some(c), SortOrder::Desc) => p.id <= c,
                (None, _) => true,
            })
            .cloned()
            .collect();
        posts.sort_by_key(|p| p.id);
        if query.order == SortOrder::Desc {
            posts.reverse();
        }
        posts.truncate(query.limit.max(0) as usize);
        Ok(posts)
    }

    async fn exists_for_window(
        &self,
        identity: &ClientIdentity,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<bool> {
        Ok(self.0.posts.lock().unwrap().iter().any(|p| {
            &p.author_identity == identity && p.created_at >= from && p.created_at < to
        }))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.0.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn delete_with_tombstone(
        &self,
        post_id: Snowflake,
        tombstone: &DeletedPost,
    ) -> RepoResult<()> {
        let mut posts = self.0.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(DomainError::PostNotFound(post_id));
        }
        self.0.stamps.lock().unwrap().retain(|s| s.post_id != post_id);
        self.0.tombstones.lock().unwrap().push(tombstone.clone());
        Ok(())
    }
}

#[async_trait]
impl TombstoneRepository for MemoryRepo {
    async fn exists_for_window(
        &self,
        identity: &ClientIdentity,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<bool> {
        Ok(self.0.tombstones.lock().unwrap().iter().any(|t| {
            &t.author_identity == identity && t.deleted_at >= from && t.deleted_at < to
        }))
    }

    async fn purge_before(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let mut tombstones = self.0.tombstones.lock().unwrap();
        let before = tombstones.len();
        tombstones.retain(|t| t.deleted_at >= cutoff);
        Ok((before - tombstones.len()) as u64)
    }
}

#[async_trait]
impl StampRepository for MemoryRepo {
    async fn toggle(&self, candidate: &Stamp) -> RepoResult<Vec<Stamp>> {
        let mut stamps = self.0.stamps.lock().unwrap();
        let before = stamps.len();
        stamps.retain(|s| {
            !s.matches(candidate.post_id, &candidate.author_identity, &candidate.kind)
        });
        if stamps.len() == before {
            stamps.push(candidate.clone());
        }
        let mut result: Vec<Stamp> = stamps
            .iter()
            .filter(|s| s.post_id == candidate.post_id)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.created_at);
        Ok(result)
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Stamp>> {
        let mut result: Vec<Stamp> = self
            .0
            .stamps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.post_id == post_id)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.created_at);
        Ok(result)
    }
}

#[async_trait]
impl EmotionTagRepository for MemoryRepo {
    async fn find_all(&self) -> RepoResult<Vec<EmotionTag>> {
        let mut tags = self.0.tags.lock().unwrap().clone();
        tags.sort_by_key(|t| t.id);
        Ok(tags)
    }

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EmotionTag>> {
        Ok(self.0.tags.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn seed(&self, new_tags: &[EmotionTag]) -> RepoResult<()> {
        let mut tags = self.0.tags.lock().unwrap();
        for tag in new_tags {
            if !tags.iter().any(|t| t.name == tag.name) {
                tags.push(tag.clone());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PushSubscriptionRepository for MemoryRepo {
    async fn upsert(&self, subscription: &PushSubscription) -> RepoResult<()> {
        let mut subscriptions = self.0.subscriptions.lock().unwrap();
        subscriptions.retain(|s| s.author_identity != subscription.author_identity);
        subscriptions.push(subscription.clone());
        Ok(())
    }

    async fn delete(&self, identity: &ClientIdentity) -> RepoResult<()> {
        self.0
            .subscriptions
            .lock()
            .unwrap()
            .retain(|s| &s.author_identity != identity);
        Ok(())
    }
}

/// Build a service context over a fresh in-memory store
pub fn test_context() -> (Arc<MemoryStore>, ServiceContext) {
    let store = Arc::new(MemoryStore::default());
    let repo = MemoryRepo(store.clone());
    let ctx = ServiceContextBuilder::new()
        .post_repo(Arc::new(repo.clone()))
        .tombstone_repo(Arc::new(repo.clone()))
        .stamp_repo(Arc::new(repo.clone()))
        .emotion_tag_repo(Arc::new(repo.clone()))
        .push_subscription_repo(Arc::new(repo))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .post_rules(PostRulesConfig {
            timezone_offset_minutes: 0,
        })
        .build()
        .unwrap();
    (store, ctx)
}

/// Seed one tag and return it
pub fn seed_tag(store: &MemoryStore, id: i64, name: &str) -> EmotionTag {
    let tag = EmotionTag::new(Snowflake::new(id), name);
    store.tags.lock().unwrap().push(tag.clone());
    tag
}
