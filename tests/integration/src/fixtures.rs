//! Test fixtures and data generators
//!
//! Seeds users, contracts, and comments directly through the repositories
//! (account and market creation belong to external systems, so there are no
//! HTTP endpoints for them), and declares the wire DTOs the tests assert on.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use market_core::entities::{Comment, Contract, User};
use market_core::traits::{CommentRepository, ContractRepository, UserRepository};
use market_core::EntityId;
use market_db::{PgCommentRepository, PgContractRepository, PgPool, PgUserRepository};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Seeded content: two users, a contract by the owner, a comment by the owner
pub struct SeededData {
    pub owner: User,
    pub liker: User,
    pub contract: Contract,
    pub comment: Comment,
}

impl SeededData {
    /// Seed a fresh owner/liker/contract/comment set
    pub async fn seed(pool: &PgPool) -> Result<Self> {
        let suffix = unique_suffix();
        // Usernames are unique in the schema and test rows persist across
        // runs, so a per-run random tag joins the in-run counter.
        let tag = EntityId::random();

        let owner = User::new(
            EntityId::random(),
            format!("owner_{tag}_{suffix}"),
            "Owner".to_string(),
        );
        let liker = User::new(
            EntityId::random(),
            format!("liker_{tag}_{suffix}"),
            "Liker".to_string(),
        );
        let contract = Contract::new(
            EntityId::random(),
            owner.id.clone(),
            format!("Will test market {suffix} resolve YES?"),
            format!("will-test-market-{suffix}-resolve-yes"),
        );
        let comment = Comment::new(
            EntityId::random(),
            contract.id.clone(),
            owner.id.clone(),
            "I think it will".to_string(),
        );

        let users = PgUserRepository::new(pool.clone());
        let contracts = PgContractRepository::new(pool.clone());
        let comments = PgCommentRepository::new(pool.clone());

        users.create(&owner).await?;
        users.create(&liker).await?;
        contracts.create(&contract).await?;
        comments.create(&comment).await?;

        Ok(Self {
            owner,
            liker,
            contract,
            comment,
        })
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// Body for POST /api/v1/react
#[derive(Debug, Serialize)]
pub struct ReactBody {
    pub content_id: String,
    pub content_type: String,
    pub remove: bool,
}

impl ReactBody {
    pub fn like(content_type: &str, content_id: &EntityId) -> Self {
        Self {
            content_id: content_id.to_string(),
            content_type: content_type.to_string(),
            remove: false,
        }
    }

    pub fn unlike(content_type: &str, content_id: &EntityId) -> Self {
        Self {
            content_id: content_id.to_string(),
            content_type: content_type.to_string(),
            remove: true,
        }
    }
}

/// A reaction row as returned by the likes endpoints
#[derive(Debug, Deserialize)]
pub struct ReactionDto {
    pub id: String,
    pub content_id: String,
    pub content_type: String,
    pub kind: String,
    pub user_id: String,
    pub content_owner_id: String,
}

/// Response of GET /likes/{content_type}/{content_id}/me
#[derive(Debug, Deserialize)]
pub struct LikedDto {
    pub liked: bool,
}

/// Response of GET /likes/{content_type}/{content_id}/count
#[derive(Debug, Deserialize)]
pub struct LikeCountDto {
    pub count: i64,
}

/// A notification as returned by GET /notifications
#[derive(Debug, Deserialize)]
pub struct NotificationDto {
    pub id: String,
    pub user_id: String,
    pub reason: String,
    pub source_content_type: String,
    pub source_content_id: String,
    pub source_user_id: String,
    pub source_user_username: String,
    pub source_text: Option<String>,
    pub source_contract_id: Option<String>,
    pub is_seen: bool,
}

/// Paginated wrapper
#[derive(Debug, Deserialize)]
pub struct PaginatedDto<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMetaDto,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMetaDto {
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

/// Response of GET /notifications/unseen-count
#[derive(Debug, Deserialize)]
pub struct UnseenCountDto {
    pub count: i64,
}
