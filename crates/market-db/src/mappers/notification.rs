//! Notification entity <-> model mapper

use market_core::{ContentType, DomainError, EntityId, Notification, NotificationReason};

use crate::models::NotificationModel;

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let reason: NotificationReason = model
            .reason
            .parse()
            .map_err(|_| DomainError::ValidationError(format!("unknown reason: {}", model.reason)))?;
        let source_content_type: ContentType = model
            .source_content_type
            .parse()
            .map_err(|_| DomainError::InvalidContentType(model.source_content_type.clone()))?;

        Ok(Notification {
            id: EntityId::new(model.id),
            user_id: EntityId::new(model.user_id),
            reason,
            source_id: EntityId::new(model.source_id),
            source_content_type,
            source_content_id: EntityId::new(model.source_content_id),
            source_user_id: EntityId::new(model.source_user_id),
            source_user_name: model.source_user_name,
            source_user_username: model.source_user_username,
            source_text: model.source_text,
            source_contract_id: model.source_contract_id.map(EntityId::new),
            source_contract_slug: model.source_contract_slug,
            is_seen: model.is_seen,
            created_time: model.created_time,
        })
    }
}
