//! Reaction entity <-> model mapper

use market_core::{ContentType, DomainError, EntityId, Reaction, ReactionKind};

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let content_type: ContentType = model
            .content_type
            .parse()
            .map_err(|_| DomainError::InvalidContentType(model.content_type.clone()))?;
        let kind: ReactionKind = model
            .kind
            .parse()
            .map_err(|_| DomainError::InvalidReactionKind(model.kind.clone()))?;

        Ok(Reaction {
            id: EntityId::new(model.id),
            content_id: EntityId::new(model.content_id),
            content_type,
            kind,
            user_id: EntityId::new(model.user_id),
            content_owner_id: EntityId::new(model.content_owner_id),
            created_time: model.created_time,
        })
    }
}
