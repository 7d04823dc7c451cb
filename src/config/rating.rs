//! Rating engine configuration

use crate::config::Constants;
use crate::error::{RatingError, Result};
use crate::rating::ModelKind;
use serde::{Deserialize, Serialize};

/// Which model to run and with which constants
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub model: ModelKind,
    pub constants: Constants,
}

impl RatingConfig {
    /// Parse configuration from TOML text
    ///
    /// ```toml
    /// model = "thurstone_mosteller_full"
    ///
    /// [constants]
    /// beta = 4.1666
    /// tau = 0.0
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| {
            RatingError::configuration(format!("Invalid rating configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON value
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value).map_err(|e| {
            RatingError::configuration(format!("Invalid rating configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.constants.validate()
    }
}
