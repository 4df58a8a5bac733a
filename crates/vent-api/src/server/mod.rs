//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::time::interval;
use tracing::{info, warn};
use vent_common::{AppConfig, AppError};
use vent_core::SnowflakeGenerator;
use vent_db::{
    create_pool, run_migrations, seed_emotion_tags, PgEmotionTagRepository, PgPostRepository,
    PgPushSubscriptionRepository, PgStampRepository, PgTombstoneRepository,
};
use vent_service::services::PostService;
use vent_service::ServiceContextBuilder;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the basic middleware stack
///
/// Used by tests; production deployments go through [`run`], which also
/// applies rate limiting and configured CORS.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the Axum application with rate limiting and configured CORS
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    // Health routes stay outside the rate limiter so probes never get throttled
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = vent_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let tombstone_repo = Arc::new(PgTombstoneRepository::new(pool.clone()));
    let stamp_repo = Arc::new(PgStampRepository::new(pool.clone()));
    let emotion_tag_repo = Arc::new(PgEmotionTagRepository::new(pool.clone()));
    let push_subscription_repo = Arc::new(PgPushSubscriptionRepository::new(pool.clone()));

    // Seed the emotion tag catalog (idempotent)
    seed_emotion_tags(emotion_tag_repo.as_ref(), &snowflake_generator)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .post_repo(post_repo)
        .tombstone_repo(tombstone_repo)
        .stamp_repo(stamp_repo)
        .emotion_tag_repo(emotion_tag_repo)
        .push_subscription_repo(push_subscription_repo)
        .snowflake_generator(snowflake_generator)
        .post_rules(config.post_rules.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Interval between tombstone purge sweeps
const TOMBSTONE_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Spawn the hourly sweep that drops tombstones older than the current day
/// window (the first tick runs immediately at startup)
fn spawn_tombstone_purger(state: AppState) {
    tokio::spawn(async move {
        let mut tick = interval(TOMBSTONE_PURGE_INTERVAL);
        loop {
            tick.tick().await;
            let service = PostService::new(state.service_context());
            if let Err(e) = service.purge_stale_tombstones().await {
                warn!(error = %e, "Tombstone purge sweep failed");
            }
        }
    });
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;
    let config = state.config().clone();

    // Background maintenance
    spawn_tombstone_purger(state.clone());

    // Build application
    let app = create_app_with_config(state, &config);

    // Run server
    run_server(app, addr).await
}
