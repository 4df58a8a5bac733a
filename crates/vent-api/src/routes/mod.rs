//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{emotion_tags, health, identity, notifications, posts, stamps};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(emotion_tag_routes())
        .merge(notification_routes())
        .merge(identity_routes())
}

/// Post and stamp routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        .route("/posts/:post_id/stamps", get(stamps::get_stamps))
        .route("/posts/:post_id/stamps", post(stamps::toggle_stamp))
}

/// Emotion tag routes
fn emotion_tag_routes() -> Router<AppState> {
    Router::new().route("/emotion-tags", get(emotion_tags::list_emotion_tags))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications/subscription", put(notifications::subscribe))
        .route(
            "/notifications/subscription",
            delete(notifications::unsubscribe),
        )
}

/// Identity routes
fn identity_routes() -> Router<AppState> {
    Router::new().route("/identity", get(identity::get_client_id))
}
