//! Contract entity <-> model mapper

use market_core::{Contract, EntityId};

use crate::models::ContractModel;

impl From<ContractModel> for Contract {
    fn from(model: ContractModel) -> Self {
        Contract {
            id: EntityId::new(model.id),
            creator_id: EntityId::new(model.creator_id),
            question: model.question,
            slug: model.slug,
            created_time: model.created_time,
        }
    }
}
