//! Notification handlers
//!
//! Endpoints for the notification inbox.

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    NotificationResponse, NotificationService, PaginatedResponse, UnseenCountResponse,
};

use crate::extractors::{AuthUser, NotificationIdPath, Pagination};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the caller's notifications, newest first
///
/// GET /notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service
        .list(auth.user_id, pagination.limit, pagination.offset)
        .await?;

    Ok(Json(PaginatedResponse::new(
        notifications,
        pagination.limit,
        pagination.offset,
    )))
}

/// Get the caller's unseen notification count
///
/// GET /notifications/unseen-count
pub async fn get_unseen_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnseenCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let count = service.unseen_count(auth.user_id).await?;
    Ok(Json(UnseenCountResponse { count }))
}

/// Mark one notification as seen
///
/// POST /notifications/{notification_id}/seen
pub async fn mark_seen(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<NotificationIdPath>,
) -> ApiResult<NoContent> {
    let notification_id = path.notification_id()?;

    let service = NotificationService::new(state.service_context());
    service.mark_seen(auth.user_id, notification_id).await?;
    Ok(NoContent)
}

/// Mark all of the caller's notifications as seen
///
/// POST /notifications/seen
pub async fn mark_all_seen(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_all_seen(auth.user_id).await?;
    Ok(NoContent)
}
