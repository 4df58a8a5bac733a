//! Stamp handlers
//!
//! Endpoints for toggling and listing stamps on posts.

use axum::{
    extract::{Path, State},
    Json,
};
use vent_service::dto::{StampResponse, ToggleStampRequest};
use vent_service::services::StampService;

use crate::extractors::{ClientId, ValidatedJson};
use crate::handlers::posts::parse_post_id;
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a stamp on a post
///
/// POST /posts/{post_id}/stamps
///
/// Responds with the post's full stamp list after the toggle.
pub async fn toggle_stamp(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ToggleStampRequest>,
) -> ApiResult<Json<Vec<StampResponse>>> {
    let post_id = parse_post_id(&post_id)?;
    let service = StampService::new(state.service_context());
    let stamps = service.toggle_stamp(&identity, post_id, request).await?;
    Ok(Json(stamps))
}

/// List a post's stamps
///
/// GET /posts/{post_id}/stamps
pub async fn get_stamps(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<StampResponse>>> {
    let post_id = parse_post_id(&post_id)?;
    let service = StampService::new(state.service_context());
    let stamps = service.get_stamps(&identity, post_id).await?;
    Ok(Json(stamps))
}
