//! Notification service
//!
//! Creates like notifications for content owners and serves the inbox
//! queries (list, unseen count, mark seen).

use market_core::entities::{Notification, NotificationReason, Reaction};
use market_core::traits::NotificationQuery;
use market_core::value_objects::EntityId;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::NotificationResponse;

use super::content::LikedContent;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a like notification for the owner of the liked content
    ///
    /// Callers are responsible for deduplication: this is only invoked for a
    /// reaction row that was actually inserted, never for a repeated like.
    #[instrument(skip(self, reaction, content))]
    pub async fn create_like_notification(
        &self,
        reaction: &Reaction,
        content: &LikedContent,
    ) -> ServiceResult<()> {
        let liker = self
            .ctx
            .user_repo()
            .find_by_id(&reaction.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", reaction.user_id.to_string()))?;

        let mut notification = Notification::new(
            self.ctx.generate_id(),
            reaction.content_owner_id.clone(),
            NotificationReason::Like,
            reaction.id.clone(),
            reaction.content_type,
            reaction.content_id.clone(),
            liker.id.clone(),
            liker.name.clone(),
            liker.username.clone(),
        )
        .with_source_text(content.source_text());

        if let Some((contract_id, slug)) = content.contract_link() {
            notification = notification.with_source_contract(contract_id.clone(), slug);
        }

        self.ctx.notification_repo().create(&notification).await?;

        info!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            source_user_id = %notification.source_user_id,
            "Like notification created"
        );

        // Publish NOTIFICATION_CREATE to the recipient's channel
        if let Err(e) = self
            .ctx
            .publisher()
            .publish_to_user(
                notification.user_id.clone(),
                "NOTIFICATION_CREATE",
                json!(NotificationResponse::from(&notification)),
            )
            .await
        {
            warn!(error = %e, "Failed to publish NOTIFICATION_CREATE event");
        }

        Ok(())
    }

    /// Get a user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: EntityId,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let query = NotificationQuery { limit, offset };
        let notifications = self
            .ctx
            .notification_repo()
            .find_by_user(&user_id, &query)
            .await?;

        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Count a user's unseen notifications
    #[instrument(skip(self))]
    pub async fn unseen_count(&self, user_id: EntityId) -> ServiceResult<i64> {
        let count = self.ctx.notification_repo().unseen_count(&user_id).await?;
        Ok(count)
    }

    /// Mark one of a user's notifications as seen
    #[instrument(skip(self))]
    pub async fn mark_seen(
        &self,
        user_id: EntityId,
        notification_id: EntityId,
    ) -> ServiceResult<()> {
        let matched = self
            .ctx
            .notification_repo()
            .mark_seen(&user_id, &notification_id)
            .await?;

        if !matched {
            return Err(ServiceError::not_found(
                "Notification",
                notification_id.to_string(),
            ));
        }

        Ok(())
    }

    /// Mark all of a user's notifications as seen, returning how many changed
    #[instrument(skip(self))]
    pub async fn mark_all_seen(&self, user_id: EntityId) -> ServiceResult<u64> {
        let updated = self.ctx.notification_repo().mark_all_seen(&user_id).await?;

        info!(user_id = %user_id, updated = updated, "Notifications marked seen");

        Ok(updated)
    }
}
