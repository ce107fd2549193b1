//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Contract, Notification, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::{ContentType, EntityId, ReactionKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction of a given kind on a content item
    async fn find(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        user_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>>;

    /// Get all reactions of a given kind on a content item, oldest first
    async fn find_by_content(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Reaction>>;

    /// Get all of a user's reactions on a content item, regardless of kind
    async fn find_by_user_on_content(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        user_id: &EntityId,
    ) -> RepoResult<Vec<Reaction>>;

    /// Insert a reaction
    ///
    /// Returns `false` when a row for the same
    /// `(user_id, content_id, content_type, kind)` already exists; the
    /// existing row is left untouched.
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Delete a reaction by id; returns whether a row was deleted
    async fn delete_by_id(&self, id: &EntityId) -> RepoResult<bool>;

    /// Count reactions of a given kind on a content item
    async fn count(
        &self,
        content_type: ContentType,
        content_id: &EntityId,
        kind: ReactionKind,
    ) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

/// Pagination options for notification queries
#[derive(Debug, Clone)]
pub struct NotificationQuery {
    /// Maximum number of rows to return
    pub limit: i64,
    /// Number of rows to skip (newest first)
    pub offset: i64,
}

impl Default for NotificationQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Get a user's notifications, newest first
    async fn find_by_user(
        &self,
        user_id: &EntityId,
        query: &NotificationQuery,
    ) -> RepoResult<Vec<Notification>>;

    /// Count a user's unseen notifications
    async fn unseen_count(&self, user_id: &EntityId) -> RepoResult<i64>;

    /// Mark one of a user's notifications as seen; returns whether a row matched
    async fn mark_seen(&self, user_id: &EntityId, id: &EntityId) -> RepoResult<bool>;

    /// Mark all of a user's notifications as seen; returns the number of rows updated
    async fn mark_all_seen(&self, user_id: &EntityId) -> RepoResult<u64>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Contract Repository
// ============================================================================

#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Find contract by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Contract>>;

    /// Create a new contract
    async fn create(&self, contract: &Contract) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}
