//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub.

use market_core::{ContentType, EntityId};

/// Channel prefix for contract (market) events
pub const CONTRACT_CHANNEL_PREFIX: &str = "contract:";
/// Channel prefix for comment events
pub const COMMENT_CHANNEL_PREFIX: &str = "comment:";
/// Channel prefix for user-specific events (notification inbox)
pub const USER_CHANNEL_PREFIX: &str = "user:";
/// Channel for broadcast events (all connected clients)
pub const BROADCAST_CHANNEL: &str = "broadcast";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for a specific contract
    Contract(EntityId),
    /// Events for a specific comment
    Comment(EntityId),
    /// Events for a specific user (all their sessions)
    User(EntityId),
    /// Broadcast to all connected clients
    Broadcast,
    /// Custom channel name
    Custom(String),
}

impl PubSubChannel {
    /// Create the channel for a content item
    #[must_use]
    pub fn content(content_type: ContentType, content_id: EntityId) -> Self {
        match content_type {
            ContentType::Contract => Self::Contract(content_id),
            ContentType::Comment => Self::Comment(content_id),
        }
    }

    /// Create a user channel
    #[must_use]
    pub fn user(user_id: EntityId) -> Self {
        Self::User(user_id)
    }

    /// Create a broadcast channel
    #[must_use]
    pub fn broadcast() -> Self {
        Self::Broadcast
    }

    /// Create a custom channel
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Contract(id) => format!("{CONTRACT_CHANNEL_PREFIX}{id}"),
            Self::Comment(id) => format!("{COMMENT_CHANNEL_PREFIX}{id}"),
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Broadcast => BROADCAST_CHANNEL.to_string(),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == BROADCAST_CHANNEL {
            return Self::Broadcast;
        }

        if let Some(id) = name.strip_prefix(CONTRACT_CHANNEL_PREFIX) {
            if let Ok(id) = EntityId::parse(id) {
                return Self::Contract(id);
            }
        }

        if let Some(id) = name.strip_prefix(COMMENT_CHANNEL_PREFIX) {
            if let Ok(id) = EntityId::parse(id) {
                return Self::Comment(id);
            }
        }

        if let Some(id) = name.strip_prefix(USER_CHANNEL_PREFIX) {
            if let Ok(id) = EntityId::parse(id) {
                return Self::User(id);
            }
        }

        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
