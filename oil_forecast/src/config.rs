//! Forecast and logging configuration

use crate::error::Result;
use crate::horizon::ForecastHorizon;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from a JSON file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Days to forecast
    pub horizon: usize,
    /// `tracing` env-filter directive, e.g. `info` or `oil_forecast=debug`
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: ForecastHorizon::DEFAULT_STEPS,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.horizon().map(|_| ())
    }

    /// The configured horizon, checked to be at least one day
    pub fn horizon(&self) -> Result<ForecastHorizon> {
        ForecastHorizon::new(self.horizon)
    }
}
