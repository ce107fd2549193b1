//! Reaction entity - a user's reaction ("like") on a piece of content

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentType, EntityId, ReactionKind};

/// Reaction entity
///
/// At most one reaction exists per `(user_id, content_id, content_type, kind)`;
/// rows are created and deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: EntityId,
    /// Id of the liked content (contract id or comment id)
    pub content_id: EntityId,
    pub content_type: ContentType,
    pub kind: ReactionKind,
    /// The user who reacted
    pub user_id: EntityId,
    /// The user who authored the liked content
    pub content_owner_id: EntityId,
    pub created_time: DateTime<Utc>,
}

impl Reaction {
    /// Create a new "like" reaction with a fresh timestamp
    pub fn like(
        id: EntityId,
        content_id: EntityId,
        content_type: ContentType,
        user_id: EntityId,
        content_owner_id: EntityId,
    ) -> Self {
        Self {
            id,
            content_id,
            content_type,
            kind: ReactionKind::Like,
            user_id,
            content_owner_id,
            created_time: Utc::now(),
        }
    }

    /// Check whether the reaction was left by the owner of the content
    #[inline]
    pub fn is_self_reaction(&self) -> bool {
        self.user_id == self.content_owner_id
    }
}
