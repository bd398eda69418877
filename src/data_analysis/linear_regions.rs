// src/data_analysis/linear_regions.rs

use log::debug;

use crate::constants::SPACING_MULTIPLIER;
use crate::errors::{AnalysisError, Result};
use crate::types::{CurvaturePoint, LinearRegion};

/// Nominal spacing between consecutive curvature points: a multiple of the
/// first displacement step of the aggregated series.
pub fn nominal_spacing(series: &[(f64, f64)]) -> Option<f64> {
    match series {
        [(x0, _), (x1, _), ..] => Some(SPACING_MULTIPLIER * (x1 - x0)),
        _ => None,
    }
}

/// Groups locally linear curvature points into contiguous regions.
///
/// A point is locally linear when `|value| < threshold`. Consecutive linear
/// points stay in the same region while their x values are at most
/// `spacing + tolerance` apart. Region endpoints are the midpoints of the first
/// and last member; single-point regions are dropped.
pub fn segment_linear_regions(
    curvature: &[CurvaturePoint],
    threshold: f64,
    spacing: f64,
    tolerance: f64,
) -> Result<Vec<LinearRegion>> {
    let linear: Vec<&CurvaturePoint> = curvature
        .iter()
        .filter(|c| c.value.abs() < threshold)
        .collect();

    let Some((&first, rest)) = linear.split_first() else {
        return Err(AnalysisError::NoLinearRegionFound);
    };

    let max_gap = spacing + tolerance;
    let mut regions = Vec::new();
    let mut start = first;
    let mut prev = first;
    let mut members = 1usize;

    for &point in rest {
        if point.x - prev.x <= max_gap {
            prev = point;
            members += 1;
            continue;
        }
        push_region(&mut regions, start, prev, members);
        start = point;
        prev = point;
        members = 1;
    }
    push_region(&mut regions, start, prev, members);

    debug!(
        "Segmented {} linear points into {} regions (threshold {}, max gap {})",
        linear.len(),
        regions.len(),
        threshold,
        max_gap
    );
    Ok(regions)
}

fn push_region(
    regions: &mut Vec<LinearRegion>,
    start: &CurvaturePoint,
    end: &CurvaturePoint,
    members: usize,
) {
    if members < 2 || start.x_mid >= end.x_mid {
        return;
    }
    regions.push(LinearRegion {
        x_start: start.x_mid,
        y_start: start.y_mid,
        x_end: end.x_mid,
        y_end: end.y_mid,
    });
}


// src/data_analysis/linear_regions.rs
