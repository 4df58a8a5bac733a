//! Service context - dependency container for services
//!
//! Holds the repositories, the ID generator, and the posting-rule
//! configuration shared by all services.

use std::sync::Arc;

use vent_common::PostRulesConfig;
use vent_core::traits::{
    EmotionTagRepository, PostRepository, PushSubscriptionRepository, StampRepository,
    TombstoneRepository,
};
use vent_core::SnowflakeGenerator;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    tombstone_repo: Arc<dyn TombstoneRepository>,
    stamp_repo: Arc<dyn StampRepository>,
    emotion_tag_repo: Arc<dyn EmotionTagRepository>,
    push_subscription_repo: Arc<dyn PushSubscriptionRepository>,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,
    post_rules: PostRulesConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        tombstone_repo: Arc<dyn TombstoneRepository>,
        stamp_repo: Arc<dyn StampRepository>,
        emotion_tag_repo: Arc<dyn EmotionTagRepository>,
        push_subscription_repo: Arc<dyn PushSubscriptionRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        post_rules: PostRulesConfig,
    ) -> Self {
        Self {
            post_repo,
            tombstone_repo,
            stamp_repo,
            emotion_tag_repo,
            push_subscription_repo,
            snowflake_generator,
            post_rules,
        }
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the tombstone repository
    pub fn tombstone_repo(&self) -> &dyn TombstoneRepository {
        self.tombstone_repo.as_ref()
    }

    /// Get the stamp repository
    pub fn stamp_repo(&self) -> &dyn StampRepository {
        self.stamp_repo.as_ref()
    }

    /// Get the emotion tag repository
    pub fn emotion_tag_repo(&self) -> &dyn EmotionTagRepository {
        self.emotion_tag_repo.as_ref()
    }

    /// Get the push subscription repository
    pub fn push_subscription_repo(&self) -> &dyn PushSubscriptionRepository {
        self.push_subscription_repo.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> vent_core::Snowflake {
        self.snowflake_generator.generate()
    }

    /// Get the posting-rule configuration
    pub fn post_rules(&self) -> &PostRulesConfig {
        &self.post_rules
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("post_rules", &self.post_rules)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    tombstone_repo: Option<Arc<dyn TombstoneRepository>>,
    stamp_repo: Option<Arc<dyn StampRepository>>,
    emotion_tag_repo: Option<Arc<dyn EmotionTagRepository>>,
    push_subscription_repo: Option<Arc<dyn PushSubscriptionRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    post_rules: Option<PostRulesConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tombstone_repo(mut self, repo: Arc<dyn TombstoneRepository>) -> Self {
        self.tombstone_repo = Some(repo);
        self
    }

    pub fn stamp_repo(mut self, repo: Arc<dyn StampRepository>) -> Self {
        self.stamp_repo = Some(repo);
        self
    }

    pub fn emotion_tag_repo(mut self, repo: Arc<dyn EmotionTagRepository>) -> Self {
        self.emotion_tag_repo = Some(repo);
        self
    }

    pub fn push_subscription_repo(mut self, repo: Arc<dyn PushSubscriptionRepository>) -> Self {
        self.push_subscription_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn post_rules(mut self, rules: PostRulesConfig) -> Self {
        self.post_rules = Some(rules);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;
        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.tombstone_repo
                .ok_or_else(|| ServiceError::validation("tombstone_repo is required"))?,
            self.stamp_repo
                .ok_or_else(|| ServiceError::validation("stamp_repo is required"))?,
            self.emotion_tag_repo
                .ok_or_else(|| ServiceError::validation("emotion_tag_repo is required"))?,
            self.push_subscription_repo
                .ok_or_else(|| ServiceError::validation("push_subscription_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.post_rules
                .ok_or_else(|| ServiceError::validation("post_rules is required"))?,
        ))
    }
}
