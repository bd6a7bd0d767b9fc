//! Calibration constants and their optional file-based overrides.
//!
//! The weight and threshold values are calibration artifacts: fixed per
//! installation, not per call. They live here as named constants so a
//! recalibration never touches the scoring algorithms, and a
//! `driftscope.toml` can override them for experiments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::errors::{DriftscopeError, DriftscopeResult};

/// Weight on normalized cyclomatic complexity
pub const WEIGHT_COMPLEXITY: f64 = 1.0;
/// Weight on normalized log-scaled source-line count
pub const WEIGHT_SLOC: f64 = 1.0;
/// Weight on the normalized severity-weighted smell signal
pub const WEIGHT_SMELLS: f64 = 1.0;
/// Weight on normalized coupling (import count)
pub const WEIGHT_COUPLING: f64 = 1.0;
/// Weight on inverted normalized maintainability
pub const WEIGHT_MAINTAINABILITY: f64 = 1.0;

/// Badness below this threshold leaves a file out of the active set
pub const ACTIVE_EPSILON: f64 = 1e-9;

/// Minimum absolute score jump/plateau height for the heat detectors
pub const ELEVATION_THRESHOLD: f64 = 0.05;
/// Mean step slope above which a series counts as warming
pub const WARMING_SLOPE: f64 = 0.001;
/// Score delta above which warming is confirmed between two snapshots
pub const WARMING_DELTA: f64 = 0.01;

/// Scoring weights for the per-file badness combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_complexity_weight")]
    pub complexity: f64,

    #[serde(default = "default_sloc_weight")]
    pub sloc: f64,

    #[serde(default = "default_smells_weight")]
    pub smells: f64,

    #[serde(default = "default_coupling_weight")]
    pub coupling: f64,

    #[serde(default = "default_maintainability_weight")]
    pub maintainability: f64,
}

fn default_complexity_weight() -> f64 {
    WEIGHT_COMPLEXITY
}

fn default_sloc_weight() -> f64 {
    WEIGHT_SLOC
}

fn default_smells_weight() -> f64 {
    WEIGHT_SMELLS
}

fn default_coupling_weight() -> f64 {
    WEIGHT_COUPLING
}

fn default_maintainability_weight() -> f64 {
    WEIGHT_MAINTAINABILITY
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            complexity: default_complexity_weight(),
            sloc: default_sloc_weight(),
            smells: default_smells_weight(),
            coupling: default_coupling_weight(),
            maintainability: default_maintainability_weight(),
        }
    }
}

impl ScoringWeights {
    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if weight > 0.0 && weight.is_finite() {
            Ok(())
        } else {
            Err(format!("{} weight must be positive and finite", name))
        }
    }

    /// All weights must be positive; zero or negative weights would let a
    /// cost signal vanish or invert.
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.complexity, "complexity")?;
        Self::validate_weight(self.sloc, "sloc")?;
        Self::validate_weight(self.smells, "smells")?;
        Self::validate_weight(self.coupling, "coupling")?;
        Self::validate_weight(self.maintainability, "maintainability")?;
        Ok(())
    }
}

/// Thresholds driving the trend classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    #[serde(default = "default_elevation_threshold")]
    pub elevation: f64,

    #[serde(default = "default_warming_slope")]
    pub warming_slope: f64,

    #[serde(default = "default_warming_delta")]
    pub warming_delta: f64,
}

fn default_elevation_threshold() -> f64 {
    ELEVATION_THRESHOLD
}

fn default_warming_slope() -> f64 {
    WARMING_SLOPE
}

fn default_warming_delta() -> f64 {
    WARMING_DELTA
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            elevation: default_elevation_threshold(),
            warming_slope: default_warming_slope(),
            warming_delta: default_warming_delta(),
        }
    }
}

/// Top-level configuration, loadable from `driftscope.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftscopeConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default)]
    pub trend: TrendThresholds,
}

impl DriftscopeConfig {
    pub fn load(path: &Path) -> DriftscopeResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: DriftscopeConfig = toml::from_str(&contents)
            .map_err(|e| DriftscopeError::Config(format!("{}: {}", path.display(), e)))?;
        config
            .weights
            .validate()
            .map_err(DriftscopeError::Config)?;
        Ok(config)
    }

    /// Load `driftscope.toml` from the working directory if present,
    /// defaults otherwise.
    pub fn load_or_default() -> DriftscopeResult<Self> {
        let path = Path::new("driftscope.toml");
        if path.exists() {
            log::debug!("loading configuration from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_validate() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn zero_weight_is_rejected() {
        let weights = ScoringWeights {
            smells: 0.0,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: DriftscopeConfig =
            toml::from_str("[weights]\ncomplexity = 2.0\n").unwrap();
        assert_eq!(config.weights.complexity, 2.0);
        assert_eq!(config.weights.sloc, WEIGHT_SLOC);
        assert_eq!(config.trend.elevation, ELEVATION_THRESHOLD);
    }
}
