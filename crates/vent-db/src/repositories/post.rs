//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use vent_core::entities::{DeletedPost, Post};
use vent_core::traits::{PostQuery, PostRepository, RepoResult, SortOrder};
use vent_core::value_objects::{ClientIdentity, Snowflake};

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, content, emotion_tag_id, author_identity, created_at, expires_at
            FROM posts
            WHERE id = $1 AND expires_at > NOW()
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let limit = query.limit.clamp(1, 101);

        let mut builder = QueryBuilder::new(
            "SELECT id, content, emotion_tag_id, author_identity, created_at, expires_at \
             FROM posts WHERE expires_at > NOW()",
        );

        if let Some(tag_id) = query.emotion_tag_id {
            builder.push(" AND emotion_tag_id = ");
            builder.push_bind(tag_id.into_inner());
        }

        // The cursor is inclusive: it names the first id of the requested page
        if let Some(cursor) = query.cursor {
            builder.push(match query.order {
                SortOrder::Asc => " AND id >= ",
                SortOrder::Desc => " AND id <= ",
            });
            builder.push_bind(cursor.into_inner());
        }

        builder.push(match query.order {
            SortOrder::Asc => " ORDER BY id ASC",
            SortOrder::Desc => " ORDER BY id DESC",
        });
        builder.push(" LIMIT ");
        builder.push_bind(limit);

        let results = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

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
            FROM posts
            WHERE author_identity = $1 AND created_at >= $2 AND created_at < $3
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

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, content, emotion_tag_id, author_identity, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(&post.content)
        .bind(post.emotion_tag_id.into_inner())
        .bind(post.author_identity.as_str())
        .bind(post.created_at)
        .bind(post.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, tombstone))]
    async fn delete_with_tombstone(
        &self,
        post_id: Snowflake,
        tombstone: &DeletedPost,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post_id));
        }

        sqlx::query(
            r#"
            INSERT INTO deleted_posts (id, author_identity, deleted_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(tombstone.id.into_inner())
        .bind(tombstone.author_identity.as_str())
        .bind(tombstone.deleted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
