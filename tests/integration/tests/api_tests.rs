//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Fetch the id of the first catalog tag (seeded at server startup)
async fn first_tag_id(server: &TestServer) -> String {
    let response = server.get("/api/v1/emotion-tags").await.unwrap();
    let tags: Vec<EmotionTagResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    tags.first().expect("emotion tag catalog is seeded").id.clone()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Emotion Tag Tests
// ============================================================================

#[tokio::test]
async fn test_emotion_tag_catalog() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/emotion-tags").await.unwrap();
    let tags: Vec<EmotionTagResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(tags.len() >= 6);
    let happy = tags.iter().find(|t| t.name == "happy").expect("happy tag");
    assert!(!happy.emoji.is_empty());
    assert!(happy.color.starts_with('#'));
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_identity_echo() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();

    let response = server.get_as("/api/v1/identity", &identity).await.unwrap();
    let echoed: IdentityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(echoed.client_id, identity);
}

#[tokio::test]
async fn test_missing_identity_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post("/api/v1/posts", &CreatePostRequest::new("hello", &tag_id))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.error.code, "MISSING_IDENTITY");
}

// ============================================================================
// Post Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("  today was rough  ", &tag_id),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(post.content, "today was rough");
    assert_eq!(post.emotion_tag.id, tag_id);
    assert!(post.mine);
    assert!(post.stamps.is_empty());
    assert!(post.expires_at > post.created_at);
}

#[tokio::test]
async fn test_daily_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("first vent", &tag_id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second post the same day is rejected
    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("second vent", &tag_id),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(error.error.code, "DAILY_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_repost_after_delete_blocked() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("regretted immediately", &tag_id),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_as(&format!("/api/v1/posts/{}", post.id), &identity)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Re-posting the same day hits the tombstone
    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("take two", &tag_id),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(error.error.code, "REPOST_AFTER_DELETE");
}

#[tokio::test]
async fn test_delete_requires_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = unique_identity();
    let stranger = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &author,
            &CreatePostRequest::new("mine alone", &tag_id),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_as(&format!("/api/v1/posts/{}", post.id), &stranger)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_POST_AUTHOR");

    // The post is untouched
    let response = server
        .get_as(&format!("/api/v1/posts/{}", post.id), &author)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_post_roundtrip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &identity,
            &CreatePostRequest::new("round trip", &tag_id),
        )
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/posts/{}", created.id), &identity)
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.content, created.content);
    assert_eq!(fetched.emotion_tag.id, created.emotion_tag.id);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_get_unknown_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();

    let response = server
        .get_as("/api/v1/posts/999999999", &identity)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_content_length_boundary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let tag_id = first_tag_id(&server).await;

    // Exactly 500 characters is accepted
    let response = server
        .post_as(
            "/api/v1/posts",
            &unique_identity(),
            &CreatePostRequest::new(&"a".repeat(500), &tag_id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // 501 characters is rejected
    let response = server
        .post_as(
            "/api/v1/posts",
            &unique_identity(),
            &CreatePostRequest::new(&"a".repeat(501), &tag_id),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.error.code, "CONTENT_TOO_LONG");
}

#[tokio::test]
async fn test_unknown_emotion_tag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_as(
            "/api/v1/posts",
            &unique_identity(),
            &CreatePostRequest::new("hello", "999999999"),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_EMOTION_TAG");
}

// ============================================================================
// Listing / Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let tag_id = first_tag_id(&server).await;

    // 11 identities, one post each (daily limit allows only one per identity)
    for i in 0..11 {
        let response = server
            .post_as(
                "/api/v1/posts",
                &unique_identity(),
                &CreatePostRequest::new(&format!("vent number {i}"), &tag_id),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let viewer = unique_identity();
    let response = server
        .get_as("/api/v1/posts?limit=10&order=desc", &viewer)
        .await
        .unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.posts.len(), 10);
    let cursor = page.next_cursor.expect("more than one page exists");

    // The cursor is inclusive: the next page starts at exactly that id
    let response = server
        .get_as(
            &format!("/api/v1/posts?limit=10&order=desc&cursor={cursor}"),
            &viewer,
        )
        .await
        .unwrap();
    let next_page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!next_page.posts.is_empty());
    assert_eq!(next_page.posts[0].id, cursor);
}

#[tokio::test]
async fn test_list_filters_by_emotion_tag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/emotion-tags").await.unwrap();
    let tags: Vec<EmotionTagResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let tag_id = &tags[1].id;

    let response = server
        .post_as(
            "/api/v1/posts",
            &unique_identity(),
            &CreatePostRequest::new("tagged vent", tag_id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_as(
            &format!("/api/v1/posts?emotion_tag_id={tag_id}&limit=50"),
            &unique_identity(),
        )
        .await
        .unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!page.posts.is_empty());
    assert!(page.posts.iter().all(|p| &p.emotion_tag.id == tag_id));
}

// ============================================================================
// Stamp Tests
// ============================================================================

#[tokio::test]
async fn test_stamp_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = unique_identity();
    let reactor = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &author,
            &CreatePostRequest::new("stamp me", &tag_id),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let stamps_path = format!("/api/v1/posts/{}/stamps", post.id);

    // Toggle on
    let response = server
        .post_as(&stamps_path, &reactor, &ToggleStampRequest::thumbs_up())
        .await
        .unwrap();
    let stamps: Vec<StampResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stamps.len(), 1);
    assert!(stamps[0].mine);

    // Toggle off
    let response = server
        .post_as(&stamps_path, &reactor, &ToggleStampRequest::thumbs_up())
        .await
        .unwrap();
    let stamps: Vec<StampResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stamps.is_empty());
}

#[tokio::test]
async fn test_stamp_toggle_is_per_identity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = unique_identity();
    let first = unique_identity();
    let second = unique_identity();
    let tag_id = first_tag_id(&server).await;

    let response = server
        .post_as(
            "/api/v1/posts",
            &author,
            &CreatePostRequest::new("popular vent", &tag_id),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let stamps_path = format!("/api/v1/posts/{}/stamps", post.id);

    server
        .post_as(&stamps_path, &first, &ToggleStampRequest::thumbs_up())
        .await
        .unwrap();
    let response = server
        .post_as(&stamps_path, &second, &ToggleStampRequest::thumbs_up())
        .await
        .unwrap();
    let stamps: Vec<StampResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stamps.len(), 2);

    // One identity toggling off leaves the other's stamp in place
    let response = server
        .post_as(&stamps_path, &first, &ToggleStampRequest::thumbs_up())
        .await
        .unwrap();
    let stamps: Vec<StampResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stamps.len(), 1);
    assert!(!stamps[0].mine, "the remaining stamp belongs to the other identity");
}

#[tokio::test]
async fn test_stamp_unknown_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_as(
            "/api/v1/posts/999999999/stamps",
            &unique_identity(),
            &ToggleStampRequest::thumbs_up(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_POST");
}

// ============================================================================
// Notification Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_subscription_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = unique_identity();

    let response = server
        .put_as(
            "/api/v1/notifications/subscription",
            &identity,
            &SubscriptionRequest::sample(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Upsert: saving again replaces, still 204
    let response = server
        .put_as(
            "/api/v1/notifications/subscription",
            &identity,
            &SubscriptionRequest::sample(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_as("/api/v1/notifications/subscription", &identity)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting an absent subscription is idempotent
    let response = server
        .delete_as("/api/v1/notifications/subscription", &identity)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}
