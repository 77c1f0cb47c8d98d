//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app().await;

    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app().await;

    let (status, _) = common::get_json(&app, "/api/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let app = common::build_test_app().await;

    let (status, _) = common::send(&app, "DELETE", "/characters/").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
