//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, notifications, reactions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(reaction_routes())
        .merge(notification_routes())
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        // The like toggle
        .route("/react", post(reactions::react))
        // Like state queries
        .route(
            "/likes/:content_type/:content_id",
            get(reactions::get_likes),
        )
        .route(
            "/likes/:content_type/:content_id/me",
            get(reactions::get_liked_by_me),
        )
        .route(
            "/likes/:content_type/:content_id/count",
            get(reactions::get_like_count),
        )
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::get_notifications))
        .route(
            "/notifications/unseen-count",
            get(notifications::get_unseen_count),
        )
        .route("/notifications/seen", post(notifications::mark_all_seen))
        .route(
            "/notifications/:notification_id/seen",
            post(notifications::mark_seen),
        )
}
