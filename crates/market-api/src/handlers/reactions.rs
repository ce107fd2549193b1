//! Reaction handlers
//!
//! Endpoints for the like toggle and like state queries.

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    LikeCountResponse, LikedResponse, ReactRequest, ReactionResponse, ReactionService,
};

use crate::extractors::{AuthUser, ContentPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Toggle a reaction on a content item
///
/// POST /react
pub async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ReactRequest>,
) -> ApiResult<NoContent> {
    let content_id = req
        .content_id
        .parse()
        .map_err(|_| ApiError::invalid_body("Invalid content_id format"))?;
    let content_type = req
        .content_type
        .parse()
        .map_err(|_| ApiError::invalid_body("Invalid content_type (expected contract or comment)"))?;

    let service = ReactionService::new(state.service_context());
    service
        .react(auth.user_id, content_type, content_id, req.remove)
        .await?;
    Ok(NoContent)
}

/// Get all likes on a content item
///
/// GET /likes/{content_type}/{content_id}
pub async fn get_likes(
    State(state): State<AppState>,
    Path(path): Path<ContentPath>,
) -> ApiResult<Json<Vec<ReactionResponse>>> {
    let content_type = path.content_type()?;
    let content_id = path.content_id()?;

    let service = ReactionService::new(state.service_context());
    let likes = service.likes_on_content(content_type, content_id).await?;
    Ok(Json(likes))
}

/// Whether the caller has liked a content item
///
/// GET /likes/{content_type}/{content_id}/me
pub async fn get_liked_by_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ContentPath>,
) -> ApiResult<Json<LikedResponse>> {
    let content_type = path.content_type()?;
    let content_id = path.content_id()?;

    let service = ReactionService::new(state.service_context());
    let liked = service
        .is_liked(auth.user_id, content_type, content_id)
        .await?;
    Ok(Json(LikedResponse { liked }))
}

/// Get the like count for a content item
///
/// GET /likes/{content_type}/{content_id}/count
pub async fn get_like_count(
    State(state): State<AppState>,
    Path(path): Path<ContentPath>,
) -> ApiResult<Json<LikeCountResponse>> {
    let content_type = path.content_type()?;
    let content_id = path.content_id()?;

    let service = ReactionService::new(state.service_context());
    let count = service.like_count(content_type, content_id).await?;
    Ok(Json(LikeCountResponse { count }))
}
