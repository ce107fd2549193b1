//! User entity <-> model mapper

use market_core::{EntityId, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: EntityId::new(model.id),
            username: model.username,
            name: model.name,
            avatar_url: model.avatar_url,
            created_time: model.created_time,
        }
    }
}
