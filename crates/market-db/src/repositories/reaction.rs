//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::Reaction;
use market_core::traits::{ReactionRepository, RepoResult};
use market_core::value_objects::{ContentType, EntityId, ReactionKind};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        user_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, content_id, content_type, kind, user_id, content_owner_id, created_time
            FROM reactions
            WHERE content_type = $1 AND content_id = $2 AND user_id = $3 AND kind = $4
            "#,
        )
        .bind(content_type.as_str())
        .bind(content_id.as_str())
        .bind(user_id.as_str())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_content(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, content_id, content_type, kind, user_id, content_owner_id, created_time
            FROM reactions
            WHERE content_type = $1 AND content_id = $2 AND kind = $3
            ORDER BY created_time
            "#,
        )
        .bind(content_type.as_str())
        .bind(content_id.as_str())
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Reaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_user_on_content(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        user_id: &EntityId,
    ) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, content_id, content_type, kind, user_id, content_owner_id, created_time
            FROM reactions
            WHERE content_type = $1 AND content_id = $2 AND user_id = $3
            ORDER BY created_time
            "#,
        )
        .bind(content_type.as_str())
        .bind(content_id.as_str())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Reaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool> {
        // The unique index on (user_id, content_id, content_type, kind)
        // arbitrates concurrent inserts; losers report zero rows affected.
        let result = sqlx::query(
            r#"
            INSERT INTO reactions (id, content_id, content_type, kind, user_id, content_owner_id, created_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, content_id, content_type, kind) DO NOTHING
            "#,
        )
        .bind(reaction.id.as_str())
        .bind(reaction.content_id.as_str())
        .bind(reaction.content_type.as_str())
        .bind(reaction.kind.as_str())
        .bind(reaction.user_id.as_str())
        .bind(reaction.content_owner_id.as_str())
        .bind(reaction.created_time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM reactions
            WHERE content_type = $1 AND content_id = $2 AND kind = $3
            "#,
        )
        .bind(content_type.as_str())
        .bind(content_id.as_str())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
