//! PostgreSQL implementation of StampRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use vent_core::entities::Stamp;
use vent_core::traits::{RepoResult, StampRepository};
use vent_core::value_objects::Snowflake;

use crate::models::StampModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StampRepository
#[derive(Clone)]
pub struct PgStampRepository {
    pool: PgPool,
}

impl PgStampRepository {
    /// Create a new PgStampRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_for_post(
        tx: &mut Transaction<'_, Postgres>,
        post_id: i64,
    ) -> Result<Vec<StampModel>, sqlx::Error> {
        sqlx::query_as::<_, StampModel>(
            r#"
            SELECT id, post_id, author_identity, kind, native, created_at
            FROM stamps
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(&mut **tx)
        .await
    }
}

#[async_trait]
impl StampRepository for PgStampRepository {
    #[instrument(skip(self, candidate), fields(post_id = %candidate.post_id, kind = %candidate.kind))]
    async fn toggle(&self, candidate: &Stamp) -> RepoResult<Vec<Stamp>> {
        // Find, delete-or-insert, and re-fetch under one transaction so two
        // concurrent identical toggles cannot both observe "not found". The
        // unique constraint on (post_id, author_identity, kind) is the backstop.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM stamps
            WHERE post_id = $1 AND author_identity = $2 AND kind = $3
            FOR UPDATE
            "#,
        )
        .bind(candidate.post_id.into_inner())
        .bind(candidate.author_identity.as_str())
        .bind(&candidate.kind)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        match existing {
            Some(stamp_id) => {
                sqlx::query("DELETE FROM stamps WHERE id = $1")
                    .bind(stamp_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO stamps (id, post_id, author_identity, kind, native, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (post_id, author_identity, kind) DO NOTHING
                    "#,
                )
                .bind(candidate.id.into_inner())
                .bind(candidate.post_id.into_inner())
                .bind(candidate.author_identity.as_str())
                .bind(&candidate.kind)
                .bind(&candidate.native)
                .bind(candidate.created_at)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        let models = Self::fetch_for_post(&mut tx, candidate.post_id.into_inner())
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(models.into_iter().map(Stamp::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Stamp>> {
        let results = sqlx::query_as::<_, StampModel>(
            r#"
            SELECT id, post_id, author_identity, kind, native, created_at
            FROM stamps
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Stamp::from).collect())
    }
}
