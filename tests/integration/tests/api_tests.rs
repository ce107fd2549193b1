//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use market_db::{create_pool, DatabaseConfig, PgPool};
use reqwest::StatusCode;

async fn connect_pool(server: &TestServer) -> PgPool {
    let db_config = DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    };
    create_pool(&db_config).await.expect("Failed to connect")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// React Tests
// ============================================================================

#[tokio::test]
async fn test_react_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = ReactBody {
        content_id: "c1".to_string(),
        content_type: "contract".to_string(),
        remove: false,
    };

    let response = server.post("/api/v1/react", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_react_unknown_content_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);

    let body = ReactBody {
        content_id: "doesnotexist".to_string(),
        content_type: "contract".to_string(),
        remove: false,
    };

    let response = server.post_auth("/api/v1/react", &token, &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_react_invalid_content_type_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);

    let body = ReactBody {
        content_id: data.contract.id.to_string(),
        content_type: "market".to_string(),
        remove: false,
    };

    let response = server.post_auth("/api/v1/react", &token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_like_then_unlike_leaves_no_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);
    let likes_path = format!("/api/v1/likes/contract/{}", data.contract.id);

    // Like
    let response = server
        .post_auth("/api/v1/react", &token, &ReactBody::like("contract", &data.contract.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let likes: Vec<ReactionDto> =
        assert_json(server.get(&likes_path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].user_id, data.liker.id.to_string());
    assert_eq!(likes[0].content_owner_id, data.owner.id.to_string());
    assert_eq!(likes[0].kind, "like");

    // Unlike
    let response = server
        .post_auth("/api/v1/react", &token, &ReactBody::unlike("contract", &data.contract.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let likes: Vec<ReactionDto> =
        assert_json(server.get(&likes_path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(likes.is_empty());
}

#[tokio::test]
async fn test_repeated_like_yields_one_row_and_one_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);

    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/react", &token, &ReactBody::like("comment", &data.comment.id))
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let count: LikeCountDto = assert_json(
        server
            .get(&format!("/api/v1/likes/comment/{}/count", data.comment.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(count.count, 1);

    let owner_token = server.token_for(&data.owner.id);
    let inbox: PaginatedDto<NotificationDto> = assert_json(
        server
            .get_auth("/api/v1/notifications", &owner_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(inbox.data.len(), 1);
}

#[tokio::test]
async fn test_unlike_nonexistent_is_noop() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);

    let response = server
        .post_auth("/api/v1/react", &token, &ReactBody::unlike("contract", &data.contract.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_is_liked_reflects_state() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.liker.id);
    let me_path = format!("/api/v1/likes/contract/{}/me", data.contract.id);

    let liked: LikedDto = assert_json(
        server.get_auth(&me_path, &token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!liked.liked);

    server
        .post_auth("/api/v1/react", &token, &ReactBody::like("contract", &data.contract.id))
        .await
        .unwrap();

    let liked: LikedDto = assert_json(
        server.get_auth(&me_path, &token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(liked.liked);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_like_notifies_content_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let liker_token = server.token_for(&data.liker.id);
    let owner_token = server.token_for(&data.owner.id);

    server
        .post_auth("/api/v1/react", &liker_token, &ReactBody::like("comment", &data.comment.id))
        .await
        .unwrap();

    let inbox: PaginatedDto<NotificationDto> = assert_json(
        server
            .get_auth("/api/v1/notifications", &owner_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(inbox.data.len(), 1);
    let n = &inbox.data[0];
    assert_eq!(n.reason, "like");
    assert_eq!(n.user_id, data.owner.id.to_string());
    assert_eq!(n.source_user_id, data.liker.id.to_string());
    assert_eq!(n.source_user_username, data.liker.username);
    assert_eq!(n.source_content_type, "comment");
    assert_eq!(n.source_content_id, data.comment.id.to_string());
    assert_eq!(n.source_contract_id, Some(data.contract.id.to_string()));
    assert!(n.source_text.is_some());
    assert!(!n.is_seen);

    // Unseen count, mark seen, count drops
    let unseen: UnseenCountDto = assert_json(
        server
            .get_auth("/api/v1/notifications/unseen-count", &owner_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(unseen.count, 1);

    let response = server
        .post_auth_empty(&format!("/api/v1/notifications/{}/seen", n.id), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let unseen: UnseenCountDto = assert_json(
        server
            .get_auth("/api/v1/notifications/unseen-count", &owner_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(unseen.count, 0);
}

#[tokio::test]
async fn test_self_like_creates_no_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let owner_token = server.token_for(&data.owner.id);

    // The owner likes their own contract
    server
        .post_auth("/api/v1/react", &owner_token, &ReactBody::like("contract", &data.contract.id))
        .await
        .unwrap();

    let inbox: PaginatedDto<NotificationDto> = assert_json(
        server
            .get_auth("/api/v1/notifications", &owner_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(inbox.data.is_empty());
}

#[tokio::test]
async fn test_mark_unknown_notification_seen_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = connect_pool(&server).await;
    let data = SeededData::seed(&pool).await.unwrap();
    let token = server.token_for(&data.owner.id);

    let response = server
        .post_auth_empty("/api/v1/notifications/doesnotexist/seen", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
