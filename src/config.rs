// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{
    DEFAULT_DISPLACEMENT_COLUMN, DEFAULT_FORCE_COLUMN, DEFAULT_FORCE_GATE,
    DEFAULT_LINEARITY_THRESHOLD, DEFAULT_SPACING_TOLERANCE,
};
use crate::errors::{AnalysisError, Result};

/// Which force sequence the moving average is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingStage {
    /// Raw force values in file order, before aggregation.
    Raw,
    /// The aggregated (one point per displacement) series.
    #[default]
    Aggregated,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Moving-average window; `None` disables smoothing.
    pub smoothing_window: Option<usize>,
    pub smoothing_stage: SmoothingStage,
    pub force_gate: f64,
    pub linearity_threshold: f64,
    pub spacing_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            smoothing_window: None,
            smoothing_stage: SmoothingStage::Aggregated,
            force_gate: DEFAULT_FORCE_GATE,
            linearity_threshold: DEFAULT_LINEARITY_THRESHOLD,
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Checks every parameter that can be checked without seeing the data.
    /// The window-vs-length bound is enforced by the smoother.
    pub fn validate(&self) -> Result<()> {
        if let Some(window) = self.smoothing_window {
            if window == 0 {
                return Err(AnalysisError::InvalidParameter {
                    name: "smoothing_window",
                    value: 0.0,
                });
            }
        }
        if !self.force_gate.is_finite() {
            return Err(AnalysisError::InvalidParameter {
                name: "force_gate",
                value: self.force_gate,
            });
        }
        if !self.linearity_threshold.is_finite() || self.linearity_threshold <= 0.0 {
            return Err(AnalysisError::InvalidParameter {
                name: "linearity_threshold",
                value: self.linearity_threshold,
            });
        }
        if !self.spacing_tolerance.is_finite() || self.spacing_tolerance < 0.0 {
            return Err(AnalysisError::InvalidParameter {
                name: "spacing_tolerance",
                value: self.spacing_tolerance,
            });
        }
        Ok(())
    }
}

/// Column layout of the delimited input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub displacement_column: usize,
    pub force_column: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            displacement_column: DEFAULT_DISPLACEMENT_COLUMN,
            force_column: DEFAULT_FORCE_COLUMN,
        }
    }
}

/// Contents of an optional JSON configuration file. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub analysis: AnalysisConfig,
    pub ingest: IngestConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AnalysisError::Config(format!("Failed to read config {}: {e}", path.display()))
    })?;
    parse_config(&contents)
        .map_err(|e| AnalysisError::Config(format!("Failed to parse config {}: {e}", path.display())))
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig> {
    let config: RuntimeConfig = serde_json::from_str(contents)?;
    Ok(config)
}
