//! PostgreSQL implementation of PushSubscriptionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vent_core::entities::PushSubscription;
use vent_core::traits::{PushSubscriptionRepository, RepoResult};
use vent_core::value_objects::ClientIdentity;

use super::error::map_db_error;

/// PostgreSQL implementation of PushSubscriptionRepository
#[derive(Clone)]
pub struct PgPushSubscriptionRepository {
    pool: PgPool,
}

impl PgPushSubscriptionRepository {
    /// Create a new PgPushSubscriptionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PushSubscriptionRepository for PgPushSubscriptionRepository {
    #[instrument(skip(self, subscription), fields(identity = %subscription.author_identity))]
    async fn upsert(&self, subscription: &PushSubscription) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO push_subscriptions (author_identity, payload, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (author_identity)
            DO UPDATE SET payload = EXCLUDED.payload, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(subscription.author_identity.as_str())
        .bind(&subscription.payload)
        .bind(subscription.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, identity: &ClientIdentity) -> RepoResult<()> {
        sqlx::query("DELETE FROM push_subscriptions WHERE author_identity = $1")
            .bind(identity.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
