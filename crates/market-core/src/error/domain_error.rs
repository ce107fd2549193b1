//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ContentType, EntityId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Contract not found: {0}")]
    ContractNotFound(EntityId),

    #[error("Comment not found: {0}")]
    CommentNotFound(EntityId),

    #[error("Notification not found: {0}")]
    NotificationNotFound(EntityId),

    #[error("{content_type} not found: {content_id}")]
    ContentNotFound {
        content_type: ContentType,
        content_id: EntityId,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid id: {0}")]
    InvalidEntityId(String),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Invalid reaction kind: {0}")]
    InvalidReactionKind(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ContractNotFound(_) => "UNKNOWN_CONTRACT",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::ContentNotFound { .. } => "UNKNOWN_CONTENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEntityId(_) => "INVALID_ID",
            Self::InvalidContentType(_) => "INVALID_CONTENT_TYPE",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ContractNotFound(_)
                | Self::CommentNotFound(_)
                | Self::NotificationNotFound(_)
                | Self::ContentNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEntityId(_)
                | Self::InvalidContentType(_)
                | Self::InvalidReactionKind(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }
}
