//! Configuration management and validation.
//!
//! Provides configuration structures for the forecast source: which page to
//! read, how long to wait for it and how to find the forecast table in it.
//! Playability thresholds are fixed and live in [`crate::constants`].

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_TABLE_CLASS, DEFAULT_USER_AGENT, TARGET_ENV_VAR,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Settings for fetching and locating the forecast table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Forecast page URL
    pub target: Option<String>,

    /// Bounded wait for the page, in seconds
    pub timeout_secs: u64,

    /// User agent sent with the request
    pub user_agent: String,

    /// CSS class of the hourly forecast table
    pub table_class: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            target: None,
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            table_class: DEFAULT_TABLE_CLASS.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration for a forecast run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Forecast source settings
    pub source: SourceConfig,

    /// Render an hourly chart for each day alongside the verdicts
    pub plot: bool,
}

impl ForecastConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the forecast page URL
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.source.target = Some(target.into());
        self
    }

    /// Set the page wait in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.source.timeout_secs = timeout_secs;
        self
    }

    /// Set the forecast table CSS class
    pub fn with_table_class(mut self, table_class: impl Into<String>) -> Self {
        self.source.table_class = table_class.into();
        self
    }

    /// Enable hourly charts
    pub fn with_plot(mut self) -> Self {
        self.plot = true;
        self
    }

    /// Check the settings needed for a fetch
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = &self.source.target {
            if target.trim().is_empty() {
                return Err(Error::configuration("Forecast target URL is empty"));
            }
            if !(target.starts_with("http://") || target.starts_with("https://")) {
                return Err(Error::configuration(format!(
                    "Forecast target must be an http(s) URL, got '{}'",
                    target
                )));
            }
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::configuration("Fetch timeout must be at least 1 second"));
        }

        if self.source.table_class.trim().is_empty() {
            return Err(Error::configuration("Forecast table class is empty"));
        }

        Ok(())
    }

    /// The target URL, or an error naming how to set it
    pub fn require_target(&self) -> Result<&str> {
        self.source.target.as_deref().ok_or_else(|| {
            Error::configuration(format!(
                "No forecast target configured: pass --target, set {} or add it to the config file",
                TARGET_ENV_VAR
            ))
        })
    }
}
