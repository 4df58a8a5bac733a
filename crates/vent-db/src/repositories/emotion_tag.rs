//! PostgreSQL implementation of EmotionTagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vent_core::entities::EmotionTag;
use vent_core::traits::{EmotionTagRepository, RepoResult};
use vent_core::value_objects::Snowflake;

use crate::models::EmotionTagModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EmotionTagRepository
#[derive(Clone)]
pub struct PgEmotionTagRepository {
    pool: PgPool,
}

impl PgEmotionTagRepository {
    /// Create a new PgEmotionTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmotionTagRepository for PgEmotionTagRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<EmotionTag>> {
        let results = sqlx::query_as::<_, EmotionTagModel>(
            r#"
            SELECT id, name FROM emotion_tags ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EmotionTag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EmotionTag>> {
        let result = sqlx::query_as::<_, EmotionTagModel>(
            r#"
            SELECT id, name FROM emotion_tags WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(EmotionTag::from))
    }

    #[instrument(skip(self, tags))]
    async fn seed(&self, tags: &[EmotionTag]) -> RepoResult<()> {
        for tag in tags {
            sqlx::query(
                r#"
                INSERT INTO emotion_tags (id, name)
                VALUES ($1, $2)
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(tag.id.into_inner())
            .bind(&tag.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }
}
