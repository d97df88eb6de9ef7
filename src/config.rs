//! Controller configuration parameters
//!
//! Tunable parameters for the program controller.
//! Defaults are the factory values; hosts may override them from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum dirt filter capacity (percent) at which a run may start.
/// A reading equal to this value is accepted.
pub const MIN_FILTER_CAPACITY_PERCENT: f32 = 75.0;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Preconditions ---
    /// Filter capacity (0-100%) below which a run is refused
    pub min_filter_capacity_percent: f32,

    // --- Diagnostics ---
    /// Record every run in the controller's history ring
    pub history_enabled: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_filter_capacity_percent: MIN_FILTER_CAPACITY_PERCENT,
            history_enabled: true,
        }
    }
}

impl ControllerConfig {
    /// Reject values the controller cannot act on safely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.min_filter_capacity_percent;
        if t.is_nan() {
            return Err(ConfigError::ValidationFailed(
                "min_filter_capacity_percent is NaN",
            ));
        }
        if !(0.0..=100.0).contains(&t) {
            return Err(ConfigError::ValidationFailed(
                "min_filter_capacity_percent outside 0-100",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Config parse failed: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }
}
