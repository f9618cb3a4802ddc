//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::DataContext;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch dataset, read-only for the lifetime of the server
    pub data: Arc<DataContext>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(data: Arc<DataContext>) -> Self {
        Self { data }
    }
}
