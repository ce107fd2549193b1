//! Reaction service
//!
//! Handles the like toggle on contracts and comments, plus the read-side
//! queries backing the client like state.

use market_core::entities::Reaction;
use market_core::value_objects::{ContentType, EntityId, ReactionKind};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::ReactionResponse;

use super::content::resolve_liked_content;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::NotificationService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a like on a content item
    ///
    /// `remove = false` adds the caller's like and notifies the content
    /// owner; `remove = true` deletes it. Both directions are idempotent.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        user_id: EntityId,
        content_type: ContentType,
        content_id: EntityId,
        remove: bool,
    ) -> ServiceResult<()> {
        if remove {
            self.remove_reaction(user_id, content_type, content_id).await
        } else {
            self.add_reaction(user_id, content_type, content_id).await
        }
    }

    async fn add_reaction(
        &self,
        user_id: EntityId,
        content_type: ContentType,
        content_id: EntityId,
    ) -> ServiceResult<()> {
        // Verify the content exists and resolve its owner
        let content = resolve_liked_content(self.ctx, content_type, &content_id).await?;

        // Already liked: nothing to insert, nobody to notify
        if self
            .ctx
            .reaction_repo()
            .find(content_type, &content_id, &user_id, ReactionKind::Like)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let reaction = Reaction::like(
            self.ctx.generate_id(),
            content_id,
            content_type,
            user_id,
            content.owner_id().clone(),
        );

        // The unique index on (user_id, content_id, content_type, kind)
        // arbitrates concurrent adds; only the winning insert notifies.
        if !self.ctx.reaction_repo().create(&reaction).await? {
            return Ok(());
        }

        info!(
            content_type = %reaction.content_type,
            content_id = %reaction.content_id,
            user_id = %reaction.user_id,
            "Reaction added"
        );

        if !reaction.is_self_reaction() {
            NotificationService::new(self.ctx)
                .create_like_notification(&reaction, &content)
                .await?;
        }

        // Publish REACTION_ADD event
        if let Err(e) = self
            .ctx
            .publisher()
            .publish_content_event(
                reaction.content_type,
                reaction.content_id.clone(),
                "REACTION_ADD",
                json!({
                    "id": reaction.id,
                    "content_id": reaction.content_id,
                    "content_type": reaction.content_type,
                    "kind": reaction.kind,
                    "user_id": reaction.user_id,
                }),
            )
            .await
        {
            warn!(error = %e, "Failed to publish REACTION_ADD event");
        }

        Ok(())
    }

    async fn remove_reaction(
        &self,
        user_id: EntityId,
        content_type: ContentType,
        content_id: EntityId,
    ) -> ServiceResult<()> {
        // Look the caller's reactions up first; a failed lookup surfaces as a
        // server error, an empty result is a no-op.
        let existing = self
            .ctx
            .reaction_repo()
            .find_by_user_on_content(content_type, &content_id, &user_id)
            .await?;

        let Some(reaction) = existing.into_iter().next() else {
            return Ok(());
        };

        self.ctx.reaction_repo().delete_by_id(&reaction.id).await?;

        info!(
            content_type = %content_type,
            content_id = %content_id,
            user_id = %user_id,
            "Reaction removed"
        );

        // Publish REACTION_REMOVE event
        if let Err(e) = self
            .ctx
            .publisher()
            .publish_content_event(
                content_type,
                content_id,
                "REACTION_REMOVE",
                json!({
                    "id": reaction.id,
                    "content_id": reaction.content_id,
                    "content_type": reaction.content_type,
                    "kind": reaction.kind,
                    "user_id": reaction.user_id,
                }),
            )
            .await
        {
            warn!(error = %e, "Failed to publish REACTION_REMOVE event");
        }

        Ok(())
    }

    /// Get all likes on a content item, oldest first
    #[instrument(skip(self))]
    pub async fn likes_on_content(
        &self,
        content_type: ContentType,
        content_id: EntityId,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_content(content_type, &content_id, ReactionKind::Like)
            .await?;

        Ok(reactions.iter().map(ReactionResponse::from).collect())
    }

    /// Whether a user has liked a content item
    #[instrument(skip(self))]
    pub async fn is_liked(
        &self,
        user_id: EntityId,
        content_type: ContentType,
        content_id: EntityId,
    ) -> ServiceResult<bool> {
        let existing = self
            .ctx
            .reaction_repo()
            .find(content_type, &content_id, &user_id, ReactionKind::Like)
            .await?;

        Ok(existing.is_some())
    }

    /// Number of likes on a content item
    #[instrument(skip(self))]
    pub async fn like_count(
        &self,
        content_type: ContentType,
        content_id: EntityId,
    ) -> ServiceResult<i64> {
        let count = self
            .ctx
            .reaction_repo()
            .count(content_type, &content_id, ReactionKind::Like)
            .await?;

        Ok(count)
    }
}
