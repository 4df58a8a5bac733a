//! Notification handlers
//!
//! Endpoints for storing and removing web-push subscriptions.

use axum::extract::State;
use vent_service::dto::SavePushSubscriptionRequest;
use vent_service::services::NotificationService;

use crate::extractors::{ClientId, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Save or replace the identity's push subscription
///
/// PUT /notifications/subscription
pub async fn subscribe(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    ValidatedJson(request): ValidatedJson<SavePushSubscriptionRequest>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.subscribe(&identity, request).await?;
    Ok(NoContent)
}

/// Remove the identity's push subscription
///
/// DELETE /notifications/subscription
pub async fn unsubscribe(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.unsubscribe(&identity).await?;
    Ok(NoContent)
}
