//! Stamp service
//!
//! Toggles emoji stamps on posts and returns the resulting stamp list.

use tracing::{info, instrument};

use vent_core::entities::Stamp;
use vent_core::value_objects::{ClientIdentity, Snowflake};
use vent_core::DomainError;

use crate::dto::{StampResponse, ToggleStampRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stamp service
pub struct StampService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StampService<'a> {
    /// Create a new StampService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a stamp on a post
    ///
    /// A stamp matching (post, identity, kind) is removed if present and
    /// inserted otherwise; the response is the post's full stamp list after
    /// the mutation, so the client can replace its local state wholesale.
    #[instrument(skip(self, request), fields(identity = %identity, post_id = %post_id))]
    pub async fn toggle_stamp(
        &self,
        identity: &ClientIdentity,
        post_id: Snowflake,
        request: ToggleStampRequest,
    ) -> ServiceResult<Vec<StampResponse>> {
        // Expired posts reject new stamps the same way missing ones do
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let candidate = Stamp::new(
            self.ctx.generate_id(),
            post_id,
            identity.clone(),
            request.kind,
            request.native,
        );

        let stamps = self.ctx.stamp_repo().toggle(&candidate).await?;

        info!(
            post_id = %post_id,
            kind = %candidate.kind,
            count = stamps.len(),
            "Stamp toggled"
        );

        Ok(stamps
            .iter()
            .map(|s| StampResponse::from_entity(s, identity))
            .collect())
    }

    /// List a post's stamps
    #[instrument(skip(self), fields(identity = %viewer))]
    pub async fn get_stamps(
        &self,
        viewer: &ClientIdentity,
        post_id: Snowflake,
    ) -> ServiceResult<Vec<StampResponse>> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let stamps = self.ctx.stamp_repo().find_by_post(post_id).await?;
        Ok(stamps
            .iter()
            .map(|s| StampResponse::from_entity(s, viewer))
            .collect())
    }
}
