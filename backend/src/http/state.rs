//! Application state for the HTTP server.

use std::sync::Arc;

use crate::layout::{build_layout, Component};
use crate::models::Dataset;
use crate::services::CallbackRegistry;

/// Shared application state passed to all handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Launch records loaded at startup
    pub dataset: Arc<Dataset>,
    /// Component tree served to the page
    pub layout: Arc<Component>,
    /// Output recomputation wiring
    pub callbacks: Arc<CallbackRegistry>,
    /// Serve the page from disk when available
    pub debug: bool,
}

impl AppState {
    /// Create the state for the launch dashboard over `dataset`.
    pub fn new(dataset: Dataset, debug: bool) -> Self {
        let layout = build_layout(&dataset);
        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            callbacks: Arc::new(CallbackRegistry::dashboard()),
            debug,
        }
    }
}
