//! Emotion tag service

use tracing::instrument;

use crate::dto::EmotionTagResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Emotion tag service
pub struct EmotionTagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmotionTagService<'a> {
    /// Create a new EmotionTagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all emotion tags with their catalog rendering data
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<Vec<EmotionTagResponse>> {
        let tags = self.ctx.emotion_tag_repo().find_all().await?;
        Ok(tags.iter().map(EmotionTagResponse::from).collect())
    }
}
