//! Emotion tag handlers

use axum::{extract::State, Json};
use vent_service::dto::EmotionTagResponse;
use vent_service::services::EmotionTagService;

use crate::response::ApiResult;
use crate::state::AppState;

/// List all emotion tags
///
/// GET /emotion-tags
pub async fn list_emotion_tags(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmotionTagResponse>>> {
    let service = EmotionTagService::new(state.service_context());
    let tags = service.list_tags().await?;
    Ok(Json(tags))
}
