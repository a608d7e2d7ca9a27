//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so the page can also be opened from a dev server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Page structure and wiring
        .route("/layout", get(handlers::get_layout))
        .route("/dependencies", get(handlers::get_dependencies))
        // Reactive recomputation
        .route("/update", post(handlers::update_outputs))
        // Direct figure access
        .route("/figures/pie", get(handlers::get_pie_figure))
        .route("/figures/scatter", get(handlers::get_scatter_figure));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, LaunchRecord, Outcome};

    #[test]
    fn test_router_creation() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "CCAFS LC-40",
            500.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        let state = AppState::new(dataset, false);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
