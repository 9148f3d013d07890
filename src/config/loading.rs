use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::versioning::{ScoringConfig, CONFIG_VERSION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid parameter {name}: {value} (must be finite and non-negative)")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("Invalid ratio {name}: {value} (must lie in [0.0, 1.0])")]
    InvalidRatio { name: &'static str, value: f64 },
    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(String),
}

impl ScoringConfig {
    /// Parse a JSON config. Missing fields take their `v0` value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;

        if config.is_degenerate() {
            warn!("all base class scores are zero; every focal weight will be 0.0");
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        let fingerprint = config.fingerprint()?;

        debug!(
            path = %path.display(),
            fingerprint = fingerprint.as_str(),
            "loaded scoring config"
        );

        Ok(config)
    }

    /// Scores stay non-negative only if every multiplier is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version.clone()));
        }

        for (name, value) in self.parameters() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        for (name, value) in self.ratios() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }

        Ok(())
    }
}
