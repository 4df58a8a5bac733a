//! # vent-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations
//! - Emotion-tag seeding from the static catalog

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgEmotionTagRepository, PgPostRepository, PgPushSubscriptionRepository, PgStampRepository,
    PgTombstoneRepository,
};
pub use seed::seed_emotion_tags;
