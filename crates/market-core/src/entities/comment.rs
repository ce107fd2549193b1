//! Comment entity - a comment on a market

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: EntityId,
    /// The market the comment was posted on
    pub contract_id: EntityId,
    /// The comment author
    pub user_id: EntityId,
    /// Plain-text comment body
    pub text: String,
    pub created_time: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: EntityId, contract_id: EntityId, user_id: EntityId, text: String) -> Self {
        Self {
            id,
            contract_id,
            user_id,
            text,
            created_time: Utc::now(),
        }
    }

    /// Short excerpt of the body for embedding in notifications
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            return self.text.clone();
        }
        let cut: String = self.text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
