//! Post service
//!
//! Handles the post lifecycle: creation under the daily posting rules,
//! listing with cursor pagination, lookup, and delete-with-tombstone.

use chrono::Utc;
use tracing::{info, instrument};

use vent_core::entities::{DeletedPost, EmotionTag, Post};
use vent_core::traits::{PostQuery, SortOrder};
use vent_core::value_objects::{ClientIdentity, Snowflake};
use vent_core::DomainError;

use crate::dto::{CreatePostRequest, ListPostsParams, PostListResponse, PostResponse};

use super::context::ServiceContext;
use super::day_window::day_bounds;
use super::error::{ServiceError, ServiceResult};

/// Default page size for post listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size for post listings
pub const MAX_PAGE_SIZE: i64 = 100;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post under the daily posting rules
    ///
    /// Rule order is fixed: the posted-today check runs before the
    /// deleted-today check, so an identity that both posted and deleted today
    /// sees the daily-limit error.
    #[instrument(skip(self, request), fields(identity = %identity))]
    pub async fn create_post(
        &self,
        identity: &ClientIdentity,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let content = Post::validate_content(&request.content)?;

        let tag_id = parse_snowflake(&request.emotion_tag_id, "emotion_tag_id")?;
        let tag = self
            .ctx
            .emotion_tag_repo()
            .find_by_id(tag_id)
            .await?
            .ok_or(DomainError::EmotionTagNotFound(tag_id))?;

        let (from, to) = day_bounds(
            Utc::now(),
            self.ctx.post_rules().timezone_offset_minutes,
        );

        if self
            .ctx
            .post_repo()
            .exists_for_window(identity, from, to)
            .await?
        {
            return Err(DomainError::DailyLimitExceeded.into());
        }

        if self
            .ctx
            .tombstone_repo()
            .exists_for_window(identity, from, to)
            .await?
        {
            return Err(DomainError::RepostAfterDeleteBlocked.into());
        }

        let post = Post::new(self.ctx.generate_id(), content, tag.id, identity.clone());
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, tag = %tag.name, "Post created");

        Ok(PostResponse::from_entity(&post, &tag, &[], identity))
    }

    /// List live posts with inclusive cursor pagination
    #[instrument(skip(self, params), fields(identity = %viewer))]
    pub async fn list_posts(
        &self,
        viewer: &ClientIdentity,
        params: ListPostsParams,
    ) -> ServiceResult<PostListResponse> {
        let limit = params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let order = match params.order.as_deref() {
            None | Some("desc") => SortOrder::Desc,
            Some("asc") => SortOrder::Asc,
            Some(other) => {
                return Err(ServiceError::validation(format!(
                    "order must be \"asc\" or \"desc\", got \"{other}\""
                )))
            }
        };

        let emotion_tag_id = params
            .emotion_tag_id
            .as_deref()
            .map(|s| parse_snowflake(s, "emotion_tag_id"))
            .transpose()?;

        let cursor = params
            .cursor
            .as_deref()
            .map(|s| parse_snowflake(s, "cursor"))
            .transpose()?;

        // Fetch one extra row; its id becomes the next page's inclusive cursor
        let mut posts = self
            .ctx
            .post_repo()
            .list(PostQuery {
                emotion_tag_id,
                order,
                cursor,
                limit: limit + 1,
            })
            .await?;

        let next_cursor = if posts.len() as i64 > limit {
            let overflow = posts.split_off(limit as usize);
            overflow.first().map(|p| p.id.to_string())
        } else {
            None
        };

        let mut responses = Vec::with_capacity(posts.len());
        for post in &posts {
            let tag = self.resolve_tag(post.emotion_tag_id).await?;
            let stamps = self.ctx.stamp_repo().find_by_post(post.id).await?;
            responses.push(PostResponse::from_entity(post, &tag, &stamps, viewer));
        }

        Ok(PostListResponse {
            posts: responses,
            next_cursor,
        })
    }

    /// Get a single post with its stamps
    #[instrument(skip(self), fields(identity = %viewer))]
    pub async fn get_post(
        &self,
        viewer: &ClientIdentity,
        post_id: Snowflake,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let tag = self.resolve_tag(post.emotion_tag_id).await?;
        let stamps = self.ctx.stamp_repo().find_by_post(post.id).await?;

        Ok(PostResponse::from_entity(&post, &tag, &stamps, viewer))
    }

    /// Delete a post, leaving a tombstone that blocks a same-day repost
    #[instrument(skip(self), fields(identity = %identity))]
    pub async fn delete_post(
        &self,
        identity: &ClientIdentity,
        post_id: Snowflake,
    ) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if !post.is_authored_by(identity) {
            return Err(DomainError::NotPostAuthor.into());
        }

        let tombstone = DeletedPost::new(self.ctx.generate_id(), identity.clone());
        self.ctx
            .post_repo()
            .delete_with_tombstone(post.id, &tombstone)
            .await?;

        info!(post_id = %post.id, "Post deleted");

        Ok(())
    }

    /// Drop tombstones that predate the current day window
    ///
    /// A tombstone only blocks reposts within its own calendar day, so
    /// anything older than today's window start is dead weight. Returns the
    /// number of rows removed.
    #[instrument(skip(self))]
    pub async fn purge_stale_tombstones(&self) -> ServiceResult<u64> {
        let (from, _) = day_bounds(
            Utc::now(),
            self.ctx.post_rules().timezone_offset_minutes,
        );

        let purged = self.ctx.tombstone_repo().purge_before(from).await?;
        if purged > 0 {
            info!(purged, "Stale tombstones purged");
        }
        Ok(purged)
    }

    /// Resolve a post's tag, falling back to a synthetic entry so a stale
    /// reference never breaks a read
    async fn resolve_tag(&self, tag_id: Snowflake) -> ServiceResult<EmotionTag> {
        Ok(self
            .ctx
            .emotion_tag_repo()
            .find_by_id(tag_id)
            .await?
            .unwrap_or_else(|| EmotionTag::new(tag_id, vent_core::DEFAULT_EMOTION.name)))
    }
}

fn parse_snowflake(s: &str, field: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(s).map_err(|_| ServiceError::validation(format!("invalid {field}: {s}")))
}
