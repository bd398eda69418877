// src/data_analysis/pipeline.rs

use log::{debug, info, warn};
use ndarray::Array1;

use crate::config::{AnalysisConfig, SmoothingStage};
use crate::data_analysis::aggregate::aggregate_samples;
use crate::data_analysis::derivative::detect_extrema;
use crate::data_analysis::linear_regions::{nominal_spacing, segment_linear_regions};
use crate::data_analysis::region_selection::{
    calculate_modulus, global_maximum, select_primary_region,
};
use crate::data_analysis::smoothing::{moving_average_smooth_f64, smooth_series};
use crate::data_input::sample_data::Sample;
use crate::errors::{AnalysisError, Result};
use crate::types::{Extremum, LinearRegion, Series};

/// Everything one pipeline run derives from a sample sequence.
///
/// Fields that can legitimately be missing (no eligible region, no modulus)
/// are `None`, and `notes` carries the reason for each absence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// One averaged point per distinct displacement, unsmoothed.
    pub aggregated: Series,
    /// Smoothed force on the aggregated displacement grid, when smoothing is enabled.
    pub smoothed: Option<Series>,
    pub first_difference: Series,
    pub second_difference: Series,
    pub extrema: Vec<Extremum>,
    /// Linear regions other than the primary one, for display.
    pub other_regions: Vec<LinearRegion>,
    pub primary_region: Option<LinearRegion>,
    /// (displacement, force) of the global maximum of the analysed series.
    pub global_max: (f64, f64),
    pub modulus: Option<f64>,
    pub notes: Vec<String>,
}

impl AnalysisResult {
    /// The series the derivative stages ran on.
    pub fn analysed_series(&self) -> &Series {
        self.smoothed.as_ref().unwrap_or(&self.aggregated)
    }

    /// Force at the upper end of the primary linear region.
    pub fn characteristic_force(&self) -> Option<f64> {
        self.primary_region.map(|r| r.y_end)
    }
}

/// Runs the full analysis on one sample sequence.
///
/// Input and configuration problems abort with an error. Conditions meaning
/// "nothing to report" leave the matching result field empty instead.
pub fn run_analysis(samples: &[Sample], config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let aggregated = aggregate_samples(samples)?;
    let smoothed = match (config.smoothing_window, config.smoothing_stage) {
        (None, _) => None,
        (Some(window), SmoothingStage::Aggregated) => Some(smooth_series(&aggregated, window)?),
        (Some(window), SmoothingStage::Raw) => {
            let smoothed_samples = smooth_raw_forces(samples, window)?;
            Some(aggregate_samples(&smoothed_samples)?)
        }
    };
    let analysed = smoothed.as_ref().unwrap_or(&aggregated);
    debug!(
        "Analysing {} points (smoothing: {:?})",
        analysed.len(),
        config.smoothing_window
    );

    let derivatives = detect_extrema(analysed, config.force_gate)?;
    let spacing = nominal_spacing(analysed).ok_or(AnalysisError::InsufficientData {
        required: 2,
        available: analysed.len(),
    })?;
    let global_max = global_maximum(analysed).ok_or(AnalysisError::EmptyInput)?;

    let mut notes = Vec::new();
    if derivatives.extrema.is_empty() {
        record_absence(AnalysisError::NoExtremaFound, &mut notes);
    }

    let regions = into_optional(
        segment_linear_regions(
            &derivatives.curvature,
            config.linearity_threshold,
            spacing,
            config.spacing_tolerance,
        ),
        &mut notes,
    )?;

    let (primary_region, other_regions) = match regions {
        Some(regions) => {
            let selection = select_primary_region(&regions, global_max);
            match into_optional(selection, &mut notes)? {
                Some((primary, others)) => (Some(primary), others),
                None => (None, regions),
            }
        }
        None => (None, Vec::new()),
    };

    let modulus = match primary_region {
        Some(region) => into_optional(calculate_modulus(&region), &mut notes)?,
        None => None,
    };

    info!(
        "Analysis complete: {} extrema, {} linear regions, modulus {}",
        derivatives.extrema.len(),
        other_regions.len() + usize::from(primary_region.is_some()),
        modulus.map_or_else(|| "undefined".to_string(), |m| format!("{m:.4}"))
    );

    Ok(AnalysisResult {
        second_difference: derivatives.second_difference(),
        first_difference: derivatives.first_difference,
        extrema: derivatives.extrema,
        smoothed,
        aggregated,
        other_regions,
        primary_region,
        global_max,
        modulus,
        notes,
    })
}

/// Smooths raw force values in file order, keeping each sample's displacement.
fn smooth_raw_forces(samples: &[Sample], window: usize) -> Result<Vec<Sample>> {
    let forces: Array1<f64> = samples.iter().map(|s| s.force).collect();
    let smoothed = moving_average_smooth_f64(&forces, window)?;
    Ok(samples
        .iter()
        .zip(smoothed.iter())
        .map(|(s, &force)| Sample::new(s.displacement, force))
        .collect())
}

/// Turns result-level errors into `None` plus a note; fatal errors pass through.
fn into_optional<T>(result: Result<T>, notes: &mut Vec<String>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if !e.is_fatal() => {
            record_absence(e, notes);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn record_absence(e: AnalysisError, notes: &mut Vec<String>) {
    warn!("{e}");
    notes.push(e.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(forces: &[f64]) -> Vec<Sample> {
        forces
            .iter()
            .enumerate()
            .map(|(i, &f)| Sample::new(i as f64, f))
            .collect()
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(matches!(
            run_analysis(&[], &AnalysisConfig::default()),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_config_checked_first() {
        let config = AnalysisConfig {
            linearity_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            run_analysis(&[], &config),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_window_longer_than_series_is_fatal() {
        let config = AnalysisConfig {
            smoothing_window: Some(10),
            ..Default::default()
        };
        let result = run_analysis(&ramp(&[1.0, 2.0, 3.0, 4.0]), &config);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidWindow { window: 10, len: 4 })
        ));
    }

    #[test]
    fn test_too_few_distinct_points_is_fatal() {
        let samples = vec![Sample::new(0.0, 1.0), Sample::new(0.0, 2.0), Sample::new(1.0, 3.0)];
        assert!(matches!(
            run_analysis(&samples, &AnalysisConfig::default()),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_curved_series_reports_absent_region() {
        let forces: Vec<f64> = (0..8).map(|i| 2.0 * (i * i) as f64 + 1.0).collect();
        let result = run_analysis(&ramp(&forces), &AnalysisConfig::default()).unwrap();
        assert!(result.primary_region.is_none());
        assert!(result.modulus.is_none());
        assert!(result.other_regions.is_empty());
        assert!(result
            .notes
            .contains(&AnalysisError::NoLinearRegionFound.to_string()));
        assert_eq!(result.global_max, (7.0, 99.0));
    }

    #[test]
    fn test_region_merged_across_peak_is_not_selected() {
        // The single non-linear point at the vertex does not split the run, so
        // the one region spans the peak at displacement 5.
        let forces = [1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 9.0, 7.0, 5.0, 3.0, 1.0];
        let result = run_analysis(&ramp(&forces), &AnalysisConfig::default()).unwrap();
        assert_eq!(result.global_max, (5.0, 11.0));
        assert_eq!(result.other_regions.len(), 1);
        assert_eq!(result.other_regions[0].x_end, 9.0);
        assert!(result.primary_region.is_none());
        assert!(result.modulus.is_none());
        assert!(result
            .notes
            .contains(&AnalysisError::NoEligibleRegion.to_string()));
    }

    #[test]
    fn test_smoothing_keeps_grid() {
        let config = AnalysisConfig {
            smoothing_window: Some(2),
            ..Default::default()
        };
        let result = run_analysis(&ramp(&[1.0, 2.0, 3.0, 5.0, 4.0, 3.0]), &config).unwrap();
        let smoothed = result.smoothed.as_ref().unwrap();
        assert_eq!(smoothed.len(), result.aggregated.len());
        assert_eq!(result.analysed_series(), smoothed);
    }

    #[test]
    fn test_raw_stage_smooths_before_aggregation() {
        let config = AnalysisConfig {
            smoothing_window: Some(1),
            smoothing_stage: SmoothingStage::Raw,
            ..Default::default()
        };
        let samples = ramp(&[1.0, 2.0, 3.0, 4.0]);
        let result = run_analysis(&samples, &config).unwrap();
        assert_eq!(result.smoothed.as_ref(), Some(&result.aggregated));
    }
}

// src/data_analysis/pipeline.rs
