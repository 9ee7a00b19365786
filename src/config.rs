//! Layout configuration
//!
//! Force constants, initial placement bounds and the driver's step count.
//! Loadable from YAML or JSON; every field falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// The four Eades constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConstants {
    /// Spring strength
    pub c1: f64,
    /// Spring rest length; must be positive
    pub c2: f64,
    /// Repulsion strength
    pub c3: f64,
    /// Step size applied to the net force when moving a vertex
    pub c4: f64,
}

impl Default for ForceConstants {
    fn default() -> Self {
        Self {
            c1: 1.0,
            c2: 16.0,
            c3: 30_000.0,
            c4: 1.0,
        }
    }
}

/// Region used to seed initial positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 700.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub constants: ForceConstants,
    pub bounds: Bounds,
    /// Number of steps the driver runs
    pub steps: usize,
    /// Seed for initial placement; `None` draws from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            constants: ForceConstants::default(),
            bounds: Bounds::default(),
            steps: 1000,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Load a configuration file, choosing the parser from the extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = fs::read_to_string(path)?;

        let config: LayoutConfig = match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            "json" => {
                serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::debug!(path = %path.display(), ?config, "loaded layout config");
        config.validate()?;
        Ok(config)
    }

    /// Reject constants that make the force model undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ForceConstants { c1, c2, c3, c4 } = self.constants;

        for (field, value) in [("c1", c1), ("c2", c2), ("c3", c3), ("c4", c4)] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not finite"),
                });
            }
        }
        if c2 <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "c2",
                reason: format!("{c2} must be positive"),
            });
        }

        let Bounds { width, height } = self.bounds;
        for (field, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} must be a positive number"),
                });
            }
        }

        Ok(())
    }
}
