//! Route modules organized by bounded context.

use axum::Router;

use crate::state::AppState;

pub mod character;
pub mod health;
pub mod quest;

/// Returns the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(character::router())
        .merge(quest::router())
}
