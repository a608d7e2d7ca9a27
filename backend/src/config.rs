//! Dashboard configuration file support.
//!
//! Configuration is optional. Without a `dashboard.toml` the dashboard reads
//! `spacex_launch_dash.csv` from the working directory and serves on
//! `127.0.0.1:8050` in debug mode.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{DashboardError, DashboardResult};

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Verbose logging and on-disk page reloading.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Launch dataset to load at startup.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_debug() -> bool {
    true
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl DashboardConfig {
    /// Load the configuration from a TOML file.
    ///
    /// A relative `data.path` is resolved against the file's directory.
    ///
    /// # Errors
    /// Returns [`DashboardError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::config(path, format!("Failed to read config file: {}", e))
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|e| {
            DashboardError::config(path, format!("Failed to parse config file: {}", e))
        })?;

        // Relative data paths are relative to the file that names them
        if config.data.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.data.path = dir.join(&config.data.path);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the configuration from the first `dashboard.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the defaults when none exists.
    pub fn from_default_location() -> DashboardResult<Self> {
        Self::from_search_root(Path::new(""))
    }

    /// Same search as [`Self::from_default_location`], starting from `root`
    /// instead of the working directory.
    pub fn from_search_root(root: &Path) -> DashboardResult<Self> {
        let search_paths = [
            root.join(CONFIG_FILE_NAME),
            root.join("backend").join(CONFIG_FILE_NAME),
            root.join("..").join(CONFIG_FILE_NAME),
        ];

        for path in &search_paths {
            if path.exists() {
                info!("Using configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        info!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
