//! Comment entity <-> model mapper

use market_core::{Comment, EntityId};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: EntityId::new(model.id),
            contract_id: EntityId::new(model.contract_id),
            user_id: EntityId::new(model.user_id),
            text: model.text,
            created_time: model.created_time,
        }
    }
}
