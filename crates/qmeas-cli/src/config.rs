//! CLI configuration.
//!
//! Values are resolved in this order (highest first):
//! 1. Command-line flags and `QMEAS_*` environment variables
//! 2. The YAML file given by `--config`
//! 3. Defaults

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qmeas_ir::Tolerance;
use serde::{Deserialize, Serialize};

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thresholds used when comparing matrices.
    pub tolerance: Tolerance,
    /// Default output format for `inspect` (table, json).
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "table".to_string()
}

impl Config {
    /// Load from a YAML file, or use defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Apply tolerance overrides from flags or environment.
    #[must_use]
    pub fn with_overrides(mut self, rtol: Option<f64>, atol: Option<f64>) -> Self {
        if let Some(rtol) = rtol {
            self.tolerance.rtol = rtol;
        }
        if let Some(atol) = atol {
            self.tolerance.atol = atol;
        }
        self
    }
}
