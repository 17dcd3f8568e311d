//! Configuration for probabilistic delta isolation
//!
//! Loaded from TOML or built from one of the presets. Every field has a
//! default, so a config file only needs to name what it changes:
//!
//! ```toml
//! significance_level = 0.003
//! inputs_per_property = 50
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of the isolation pipeline and of property-based oracles
///
/// # Example
/// ```
/// use aislar::config::IsolationConfig;
///
/// let config = IsolationConfig::default();
/// assert_eq!(config.significance_level, 0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolationConfig {
    /// Family-wise significance level (alpha) for Holm-Bonferroni
    ///
    /// - 0.01 (default): a false "Failed" on at most 1% of candidates
    /// - 0.003: stricter, for long minimizations with many oracle calls
    /// - 0.05: looser, detects weak effects with fewer inputs
    pub significance_level: f64,

    /// Random inputs generated per property for each candidate
    ///
    /// Default: 25
    pub inputs_per_property: usize,

    /// Samples (shots) taken per input
    ///
    /// Default: 1000
    pub measurements: usize,

    /// Run the artifact filter on the isolated deltas
    ///
    /// Default: true
    pub filter_artifacts: bool,

    /// Largest delta store the artifact filter accepts
    ///
    /// The filter enumerates combinations, so its cost doubles with every
    /// extra delta. Larger stores are reported unfiltered.
    ///
    /// Default: 12
    pub artifact_filter_limit: usize,

    /// Merge adjacent Removal/Addition pairs into Replacements before minimizing
    ///
    /// Default: false
    pub coalesce_replacements: bool,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.01,
            inputs_per_property: 25,
            measurements: 1000,
            filter_artifacts: true,
            artifact_filter_limit: 12,
            coalesce_replacements: false,
        }
    }
}

impl IsolationConfig {
    /// Fewer false failures at the cost of sensitivity
    pub fn strict() -> Self {
        Self {
            significance_level: 0.003,
            inputs_per_property: 50,
            ..Self::default()
        }
    }

    /// More sensitive, tolerates more false failures
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.05,
            inputs_per_property: 10,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.significance_level > 0.0 && self.significance_level <= 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1], got {}",
                self.significance_level
            ));
        }

        if self.inputs_per_property == 0 {
            return Err("inputs_per_property must be >= 1, got 0".to_string());
        }

        if self.measurements == 0 {
            return Err("measurements must be >= 1, got 0".to_string());
        }

        if self.artifact_filter_limit == 0 {
            return Err("artifact_filter_limit must be >= 1, got 0".to_string());
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid isolation config: {}", e))?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize config")
    }
}
