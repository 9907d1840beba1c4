//! Integration tests for the health endpoints.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use questline_api::routes::health::LIVENESS_TEXT;
use questline_test_support::intro_camp_story;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_returns_liveness_text() {
    let (app, _) = common::build_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], LIVENESS_TEXT.as_bytes());
}

#[tokio::test]
async fn test_health_returns_200_with_status_and_story_hash() {
    let (app, _) = common::build_test_app();

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["story_hash"], intro_camp_story().version_hash());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _) = common::build_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
