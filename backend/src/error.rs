//! Error types for dashboard startup.
//!
//! Everything that can go wrong here happens before the server accepts its
//! first request, and none of it is retried.

use std::path::PathBuf;

/// Result type for dataset and configuration loading.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard startup.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The launch dataset is missing, unreadable or malformed.
    #[error("Data unavailable: {message} (source={})", source_path.display())]
    DataUnavailable {
        message: String,
        source_path: PathBuf,
    },

    /// The configuration file exists but cannot be read or parsed.
    #[error("Configuration error: {message} (path={})", path.display())]
    Config { message: String, path: PathBuf },
}

impl DashboardError {
    /// Create a data unavailable error for the given source.
    pub fn data_unavailable(source_path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
            source_path: source_path.into(),
        }
    }

    /// Create a configuration error for the given file.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether this error came from the dataset rather than the configuration.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}
