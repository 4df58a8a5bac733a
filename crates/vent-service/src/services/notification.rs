//! Notification service
//!
//! Stores one web-push subscription blob per identity. Delivery is handled by
//! an external push service; this side only persists the subscription.

use tracing::{info, instrument};

use vent_core::entities::PushSubscription;
use vent_core::value_objects::ClientIdentity;

use crate::dto::SavePushSubscriptionRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Save or replace the identity's push subscription
    #[instrument(skip(self, request), fields(identity = %identity))]
    pub async fn subscribe(
        &self,
        identity: &ClientIdentity,
        request: SavePushSubscriptionRequest,
    ) -> ServiceResult<()> {
        let payload = serde_json::to_string(&request.subscription)
            .map_err(|e| ServiceError::validation(format!("invalid subscription: {e}")))?;

        let subscription = PushSubscription::new(identity.clone(), payload);
        self.ctx.push_subscription_repo().upsert(&subscription).await?;

        info!("Push subscription saved");
        Ok(())
    }

    /// Remove the identity's push subscription if present
    #[instrument(skip(self), fields(identity = %identity))]
    pub async fn unsubscribe(&self, identity: &ClientIdentity) -> ServiceResult<()> {
        self.ctx.push_subscription_repo().delete(identity).await?;
        info!("Push subscription removed");
        Ok(())
    }
}
