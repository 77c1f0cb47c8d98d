//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Whether a store connection could be acquired.
    pub store: String,
}

/// GET /health
///
/// Opens and immediately drops a unit of work so a dead store reports 503.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, store) = match state.repository.begin().await {
        Ok(_uow) => (StatusCode::OK, "ok", "ok"),
        Err(err) => {
            warn!(error = %err, "store unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        }),
    )
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
