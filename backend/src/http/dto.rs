//! Data Transfer Objects for the HTTP API.
//!
//! Figures, layout nodes and callback descriptions already derive
//! Serialize/Deserialize and are re-exported as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::charts::Figure;
pub use crate::layout::Component;
pub use crate::services::{CallbackSpec, InputValues};
use crate::models::SiteSelection;

/// Request body for recomputing outputs after a control change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Ids of the controls that changed. Empty on the initial render.
    #[serde(default)]
    pub changed: Vec<String>,
    /// Current value of every control the affected callbacks read
    #[serde(default)]
    pub inputs: InputValues,
}

/// Fresh figures keyed by output component id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub outputs: BTreeMap<String, Figure>,
}

/// Callback graph response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependenciesResponse {
    pub callbacks: Vec<CallbackSpec>,
}

/// Query parameters for the pie figure endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Site name or `ALL` (default)
    #[serde(default)]
    pub site: Option<SiteSelection>,
}

/// Query parameters for the scatter figure endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Site name or `ALL` (default)
    #[serde(default)]
    pub site: Option<SiteSelection>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
}
