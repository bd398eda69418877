// src/data_analysis/derivative.rs

use log::debug;

use crate::constants::MIN_SERIES_LEN;
use crate::errors::{AnalysisError, Result};
use crate::types::{CurvaturePoint, Extremum, ExtremumKind, Series};

/// Output of [`detect_extrema`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivativeAnalysis {
    pub extrema: Vec<Extremum>,
    /// One entry per index i in `2..len`, placed at x[i]. Gated points carry 0.0.
    pub first_difference: Series,
    /// Second differences with their segmentation midpoints; gated points are absent.
    pub curvature: Vec<CurvaturePoint>,
}

impl DerivativeAnalysis {
    /// The second-difference series as plain (x, value) pairs.
    pub fn second_difference(&self) -> Series {
        self.curvature.iter().map(|c| (c.x, c.value)).collect()
    }
}

/// Walks the series with backward first and second differences and flags
/// turning points.
///
/// Points with force below `force_gate` are treated as pre-test noise: they
/// produce a zero first-difference placeholder and nothing else. A turning
/// point is reported at the vertex sample i-1 when the differences on either
/// side of it have strictly opposite signs; a zero difference never counts.
pub fn detect_extrema(series: &[(f64, f64)], force_gate: f64) -> Result<DerivativeAnalysis> {
    if series.len() < MIN_SERIES_LEN {
        return Err(AnalysisError::InsufficientData {
            required: MIN_SERIES_LEN,
            available: series.len(),
        });
    }

    let mut analysis = DerivativeAnalysis {
        extrema: Vec::new(),
        first_difference: Vec::with_capacity(series.len() - 2),
        curvature: Vec::with_capacity(series.len() - 2),
    };
    let mut gated = 0usize;

    for i in 2..series.len() {
        let (x0, y0) = series[i - 2];
        let (x1, y1) = series[i - 1];
        let (x2, y2) = series[i];

        if y2 < force_gate {
            analysis.first_difference.push((x2, 0.0));
            gated += 1;
            continue;
        }

        let d1 = y2 - y1;
        let d2 = y1 - y0;
        analysis.first_difference.push((x2, d2));
        analysis.curvature.push(CurvaturePoint {
            x: x1,
            value: d1 - d2,
            x_mid: (x0 + x2) / 2.0,
            y_mid: (y0 + y2) / 2.0,
        });

        if d1 * d2 < 0.0 {
            let kind = if d2 > 0.0 {
                ExtremumKind::LocalMax
            } else {
                ExtremumKind::LocalMin
            };
            analysis.extrema.push(Extremum { x: x1, y: y1, kind });
        }
    }

    debug!(
        "Derivative pass: {} extrema, {} curvature points, {} gated below {}",
        analysis.extrema.len(),
        analysis.curvature.len(),
        gated,
        force_gate
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(forces: &[f64]) -> Series {
        forces.iter().enumerate().map(|(i, &f)| (i as f64, f)).collect()
    }

    #[test]
    fn test_single_peak_detected_at_vertex() {
        let series = indexed(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let analysis = detect_extrema(&series, 0.0).unwrap();
        assert_eq!(
            analysis.extrema,
            vec![Extremum {
                x: 5.0,
                y: 5.0,
                kind: ExtremumKind::LocalMax
            }]
        );
        assert_eq!(analysis.first_difference.len(), series.len() - 2);
    }

    #[test]
    fn test_monotonic_series_has_no_extrema() {
        let series = indexed(&[1.0, 2.0, 4.0, 7.0, 11.0, 16.0]);
        let analysis = detect_extrema(&series, 0.0).unwrap();
        assert!(analysis.extrema.is_empty());
    }

    #[test]
    fn test_trough_is_local_min() {
        let series = indexed(&[5.0, 4.0, 3.0, 4.0, 5.0]);
        let analysis = detect_extrema(&series, 0.0).unwrap();
        assert_eq!(analysis.extrema.len(), 1);
        assert_eq!(analysis.extrema[0].kind, ExtremumKind::LocalMin);
        assert_eq!(analysis.extrema[0].x, 2.0);
    }

    #[test]
    fn test_flat_runs_are_not_extrema() {
        let series = indexed(&[1.0, 2.0, 2.0, 1.0]);
        let analysis = detect_extrema(&series, 0.0).unwrap();
        assert!(analysis.extrema.is_empty());
    }

    #[test]
    fn test_gated_points_keep_position_but_skip_curvature() {
        let series = indexed(&[0.0, 0.1, 0.2, 3.0, 4.0, 5.0]);
        let analysis = detect_extrema(&series, 0.5).unwrap();
        assert_eq!(analysis.first_difference.len(), 4);
        assert_eq!(analysis.first_difference[0], (2.0, 0.0));
        assert_eq!(analysis.curvature.len(), 3);
        assert_eq!(analysis.curvature[0].x, 2.0);
    }

    #[test]
    fn test_curvature_midpoints() {
        let series = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)];
        let analysis = detect_extrema(&series, 0.0).unwrap();
        let c = analysis.curvature[0];
        assert_eq!(c.x, 1.0);
        assert_eq!(c.value, 2.0);
        assert_eq!(c.x_mid, 1.0);
        assert_eq!(c.y_mid, 3.0);
        assert_eq!(analysis.second_difference(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_short_series_rejected() {
        assert!(matches!(
            detect_extrema(&indexed(&[1.0, 2.0]), 0.0),
            Err(AnalysisError::InsufficientData { required: 3, available: 2 })
        ));
    }
}

// src/data_analysis/derivative.rs
