use std::sync::Arc;

use sewa_inference::Models;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Immutable after startup; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub models: Arc<Models>,
    pub started_at: jiff::Timestamp,
}

impl AppState {
    pub fn new(models: Models) -> Self {
        Self {
            models: Arc::new(models),
            started_at: jiff::Timestamp::now(),
        }
    }
}
