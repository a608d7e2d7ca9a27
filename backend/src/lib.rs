//! # Launch Records Dashboard
//!
//! Interactive dashboard over a fixed dataset of historical launches.
//!
//! A dropdown picks a launch site (or every site), a pie chart shows the
//! success distribution, a range slider narrows the payload mass window and a
//! scatter chart relates payload to outcome, colored by booster category.
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV parsing into launch records (Polars)
//! - [`models`]: Launch records, filter selections and the loaded [`models::Dataset`]
//! - [`charts`]: Chart specifications in Plotly figure shape
//! - [`services`]: Pie and scatter recomputation, and the callback registry
//!   that wires them to controls
//! - [`layout`]: The static component tree and dropdown options
//! - [`config`]: Optional `dashboard.toml` settings
//! - [`http`]: Axum-based server and request handlers
//!
//! The dataset is loaded once at startup. Every recomputation is a pure
//! function of the current control values over that read-only data.

pub mod charts;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{DashboardError, DashboardResult};
