//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use questlog_store::SqliteRepository;
use tower::ServiceExt;

use questlog_api::routes;
use questlog_api::state::AppState;

/// Build the full app router over a fresh in-memory `SqliteRepository`.
/// Uses the same route structure as `main.rs`.
pub async fn build_test_app() -> Router {
    let repository = SqliteRepository::in_memory().await.unwrap();
    build_test_app_with(repository)
}

/// Build the full app router over an existing repository, so tests can
/// inspect the database directly.
pub fn build_test_app_with(repository: SqliteRepository) -> Router {
    routes::router().with_state(AppState::new(Arc::new(repository)))
}

/// Send a request without a body and return the status and JSON response.
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a POST request with query parameters and return the response.
pub async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri).await
}

/// Send a PUT request and return the response.
pub async fn put(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "PUT", uri).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri).await
}
