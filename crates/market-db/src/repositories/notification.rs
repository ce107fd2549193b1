//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::Notification;
use market_core::traits::{NotificationQuery, NotificationRepository, RepoResult};
use market_core::value_objects::EntityId;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, user_id, reason,
                source_id, source_content_type, source_content_id,
                source_user_id, source_user_name, source_user_username,
                source_text, source_contract_id, source_contract_slug,
                is_seen, created_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(notification.id.as_str())
        .bind(notification.user_id.as_str())
        .bind(notification.reason.as_str())
        .bind(notification.source_id.as_str())
        .bind(notification.source_content_type.as_str())
        .bind(notification.source_content_id.as_str())
        .bind(notification.source_user_id.as_str())
        .bind(&notification.source_user_name)
        .bind(&notification.source_user_username)
        .bind(notification.source_text.as_deref())
        .bind(notification.source_contract_id.as_ref().map(EntityId::as_str))
        .bind(notification.source_contract_slug.as_deref())
        .bind(notification.is_seen)
        .bind(notification.created_time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: &EntityId,
        query: &NotificationQuery,
    ) -> RepoResult<Vec<Notification>> {
        let limit = query.limit.clamp(1, 100);
        let offset = query.offset.max(0);

        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, reason,
                   source_id, source_content_type, source_content_id,
                   source_user_id, source_user_name, source_user_username,
                   source_text, source_contract_id, source_contract_slug,
                   is_seen, created_time
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_time DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn unseen_count(&self, user_id: &EntityId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM notifications
            WHERE user_id = $1 AND NOT is_seen
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn mark_seen(&self, user_id: &EntityId, id: &EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_seen = TRUE
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_str())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn mark_all_seen(&self, user_id: &EntityId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_seen = TRUE
            WHERE user_id = $1 AND NOT is_seen
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
