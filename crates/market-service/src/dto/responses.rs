//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids serialize as
//! plain strings.

use chrono::{DateTime, Utc};
use market_core::value_objects::{ContentType, EntityId, ReactionKind};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, limit: i64, offset: i64) -> Self {
        // has_more is inferred from a full page, not a COUNT
        let has_more = data.len() as i64 == limit;
        Self {
            data,
            pagination: PaginationMeta {
                limit,
                offset,
                has_more,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Page size limit used
    pub limit: i64,
    /// Offset used
    pub offset: i64,
    /// Whether more results may exist
    pub has_more: bool,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A single reaction on a content item
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: EntityId,
    pub content_id: EntityId,
    pub content_type: ContentType,
    pub kind: ReactionKind,
    pub user_id: EntityId,
    pub content_owner_id: EntityId,
    pub created_time: DateTime<Utc>,
}

/// Whether the caller has liked a content item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikedResponse {
    pub liked: bool,
}

/// Like count for a content item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeCountResponse {
    pub count: i64,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// A notification in a user's inbox
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: EntityId,
    pub user_id: EntityId,
    pub reason: String,
    pub source_id: EntityId,
    pub source_content_type: ContentType,
    pub source_content_id: EntityId,
    pub source_user_id: EntityId,
    pub source_user_name: String,
    pub source_user_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_contract_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_contract_slug: Option<String>,
    pub is_seen: bool,
    pub created_time: DateTime<Utc>,
}

/// Count of unseen notifications
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnseenCountResponse {
    pub count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_has_more() {
        let full: PaginatedResponse<i32> = PaginatedResponse::new(vec![1, 2, 3], 3, 0);
        assert!(full.pagination.has_more);

        let partial: PaginatedResponse<i32> = PaginatedResponse::new(vec![1, 2], 3, 0);
        assert!(!partial.pagination.has_more);
    }

    #[test]
    fn test_liked_response_serialization() {
        let json = serde_json::to_string(&LikedResponse { liked: true }).unwrap();
        assert_eq!(json, r#"{"liked":true}"#);
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(true, false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.redis, "unhealthy");
    }
}
