//! Notification entity - an event delivered to a user's inbox

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::{ContentType, EntityId};

/// Why a notification was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationReason {
    /// Someone liked content you authored
    Like,
}

impl NotificationReason {
    /// Stable string form used in the database and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
        }
    }
}

impl fmt::Display for NotificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationReason {
    type Err = NotificationReasonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            other => Err(NotificationReasonParseError(other.to_string())),
        }
    }
}

/// Error when parsing a NotificationReason from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification reason: {0}")]
pub struct NotificationReasonParseError(pub String);

/// Notification entity
///
/// Source metadata (liker display data, content excerpt, contract link) is
/// denormalized into the row so clients render the inbox without extra
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: EntityId,
    /// The recipient (owner of the liked content)
    pub user_id: EntityId,
    pub reason: NotificationReason,
    /// The reaction that caused this notification
    pub source_id: EntityId,
    pub source_content_type: ContentType,
    pub source_content_id: EntityId,
    /// The user whose action caused the notification
    pub source_user_id: EntityId,
    pub source_user_name: String,
    pub source_user_username: String,
    /// Comment excerpt or contract question, for inline rendering
    pub source_text: Option<String>,
    /// The market the liked content belongs to, when known
    pub source_contract_id: Option<EntityId>,
    pub source_contract_slug: Option<String>,
    pub is_seen: bool,
    pub created_time: DateTime<Utc>,
}

impl Notification {
    /// Create a new unseen notification with a fresh timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EntityId,
        user_id: EntityId,
        reason: NotificationReason,
        source_id: EntityId,
        source_content_type: ContentType,
        source_content_id: EntityId,
        source_user_id: EntityId,
        source_user_name: String,
        source_user_username: String,
    ) -> Self {
        Self {
            id,
            user_id,
            reason,
            source_id,
            source_content_type,
            source_content_id,
            source_user_id,
            source_user_name,
            source_user_username,
            source_text: None,
            source_contract_id: None,
            source_contract_slug: None,
            is_seen: false,
            created_time: Utc::now(),
        }
    }

    /// Attach the source text (comment excerpt or contract question)
    #[must_use]
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Attach the contract the liked content belongs to
    #[must_use]
    pub fn with_source_contract(mut self, contract_id: EntityId, slug: impl Into<String>) -> Self {
        self.source_contract_id = Some(contract_id);
        self.source_contract_slug = Some(slug.into());
        self
    }
}
