//! User entity - represents a market participant

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// User entity
///
/// Only the fields the reaction/notification slice needs are modeled here;
/// account management itself belongs to the external auth system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    /// Unique handle used in URLs and mentions
    pub username: String,
    /// Display name
    pub name: String,
    pub avatar_url: Option<String>,
    pub created_time: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: EntityId, username: String, name: String) -> Self {
        Self {
            id,
            username,
            name,
            avatar_url: None,
            created_time: Utc::now(),
        }
    }

    /// Set the avatar URL
    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}
