//! HTTP handlers for the dashboard API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer. Recomputation is synchronous over memory-resident data, so handlers
//! call services directly.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{
    Component, DependenciesResponse, Figure, HealthResponse, PieQuery, ScatterQuery,
    UpdateRequest, UpdateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::PayloadRange;
use crate::services::{compute_pie_chart, compute_scatter_chart};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Embedded dashboard page.
const EMBEDDED_INDEX_HTML: &str = include_str!("static/index.html");

// =============================================================================
// Page
// =============================================================================

/// GET /
///
/// Serve the dashboard page. In debug mode an on-disk copy takes precedence
/// so the page can be edited without recompiling.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    if state.debug {
        let external_paths = [
            "backend/src/http/static/index.html", // Workspace root
            "src/http/static/index.html",         // Crate directory
        ];
        for path in external_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                debug!("Serving dashboard page from {}", path);
                return Html(content);
            }
        }
    }

    Html(EMBEDDED_INDEX_HTML.to_string())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        sites: state.dataset.sites().len(),
    }))
}

// =============================================================================
// Layout and Callbacks
// =============================================================================

/// GET /v1/layout
///
/// Component tree for the page, built once at startup.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<Component> {
    Ok(Json(state.layout.as_ref().clone()))
}

/// GET /v1/dependencies
///
/// Which inputs each output depends on.
pub async fn get_dependencies(
    State(state): State<AppState>,
) -> HandlerResult<DependenciesResponse> {
    Ok(Json(DependenciesResponse {
        callbacks: state.callbacks.dependencies(),
    }))
}

/// POST /v1/update
///
/// Recompute every output that depends on a changed control.
pub async fn update_outputs(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> HandlerResult<UpdateResponse> {
    debug!(changed = ?request.changed, "Dispatching control change");
    let outputs = state
        .callbacks
        .dispatch(&state.dataset, &request.changed, &request.inputs)?;

    Ok(Json(UpdateResponse { outputs }))
}

// =============================================================================
// Figure Endpoints
// =============================================================================

/// GET /v1/figures/pie
///
/// Pie figure for a site (`ALL` when omitted).
pub async fn get_pie_figure(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<Figure> {
    let site = query.site.unwrap_or_default();
    Ok(Json(compute_pie_chart(&state.dataset, &site)))
}

/// GET /v1/figures/scatter
///
/// Scatter figure for a site and payload window. Missing bounds default to
/// the dataset's payload bounds.
pub async fn get_scatter_figure(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<Figure> {
    let bounds = state.dataset.payload_bounds();
    let low = query.low.unwrap_or(bounds.low.value());
    let high = query.high.unwrap_or(bounds.high.value());
    if !low.is_finite() || !high.is_finite() {
        return Err(AppError::BadRequest(format!(
            "Payload bounds must be finite, got [{}, {}]",
            low, high
        )));
    }

    let site = query.site.unwrap_or_default();
    let range = PayloadRange::new(low, high);
    Ok(Json(compute_scatter_chart(&state.dataset, &site, &range)))
}
