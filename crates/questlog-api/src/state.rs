//! Shared application state.

use std::sync::Arc;

use questlog_core::repository::Repository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store that hands out one unit of work per request.
    pub repository: Arc<dyn Repository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }
}
