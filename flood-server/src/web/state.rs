//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedFloodClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached flood API client
    pub flood: Arc<CachedFloodClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(flood: CachedFloodClient) -> Self {
        Self {
            flood: Arc::new(flood),
        }
    }
}
