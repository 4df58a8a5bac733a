//! Post handlers
//!
//! Endpoints for the post lifecycle.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use vent_core::Snowflake;
use vent_service::dto::{CreatePostRequest, ListPostsParams, PostListResponse, PostResponse};
use vent_service::services::PostService;

use crate::extractors::{ClientId, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(&identity, request).await?;
    Ok(Created(Json(post)))
}

/// List posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    Query(params): Query<ListPostsParams>,
) -> ApiResult<Json<PostListResponse>> {
    let service = PostService::new(state.service_context());
    let listing = service.list_posts(&identity, params).await?;
    Ok(Json(listing))
}

/// Get a single post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_post_id(&post_id)?;
    let service = PostService::new(state.service_context());
    let post = service.get_post(&identity, post_id).await?;
    Ok(Json(post))
}

/// Delete own post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    ClientId(identity): ClientId,
    Path(post_id): Path<String>,
) -> ApiResult<NoContent> {
    let post_id = parse_post_id(&post_id)?;
    let service = PostService::new(state.service_context());
    service.delete_post(&identity, post_id).await?;
    Ok(NoContent)
}

pub(crate) fn parse_post_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
}
