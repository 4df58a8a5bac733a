//! PostgreSQL implementation of TombstoneRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use vent_core::traits::{RepoResult, TombstoneRepository};
use vent_core::value_objects::ClientIdentity;

use super::error::map_db_error;

/// PostgreSQL implementation of TombstoneRepository
#[derive(Clone)]
pub struct PgTombstoneRepository {
    pool: PgPool,
}

impl PgTombstoneRepository {
    /// Create a new PgTombstoneRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TombstoneRepository for PgTombstoneRepository {
    #[instrument(skip(self))]
    async fn exists_for_window(
        &self,
        identity: &ClientIdentity,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM deleted_posts
            WHERE author_identity = $1 AND deleted_at >= $2 AND deleted_at < $3
            "#,
        )
        .bind(identity.as_str())
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count > 0)
    }

    #[instrument(skip(self))]
    async fn purge_before(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM deleted_posts WHERE deleted_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
