//! Calculator startup configuration

use crate::error::ConfigError;
use crate::projection::{TimeUnit, DEFAULT_PRINCIPAL, DEFAULT_TIME_VALUE};
use crate::rates::RateRepresentation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default representation seeded at startup
pub const DEFAULT_INITIAL_RATE: &str = "nominal_Annual";

/// Default rate (percent) seeded at startup
pub const DEFAULT_INITIAL_RATE_VALUE: &str = "5";

/// Startup values for a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Principal used when the field is blank
    pub default_principal: f64,

    /// Horizon used when the field is blank
    pub default_time_value: f64,

    pub default_time_unit: TimeUnit,

    /// Representation id active at startup (e.g. "nominal_Annual")
    pub initial_rate: String,

    /// Raw value entered into `initial_rate` at startup; blank starts empty
    pub initial_rate_value: String,
}

impl CalculatorConfig {
    /// Load a config file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.initial_representation()?;
        log::debug!("loaded calculator config from {}", path.display());
        Ok(config)
    }

    pub fn initial_representation(&self) -> Result<RateRepresentation, ConfigError> {
        self.initial_rate
            .parse()
            .map_err(|_| ConfigError::UnknownRepresentation(self.initial_rate.clone()))
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_principal: DEFAULT_PRINCIPAL,
            default_time_value: DEFAULT_TIME_VALUE,
            default_time_unit: TimeUnit::Years,
            initial_rate: DEFAULT_INITIAL_RATE.to_string(),
            initial_rate_value: DEFAULT_INITIAL_RATE_VALUE.to_string(),
        }
    }
}
