// src/data_analysis/aggregate.rs

use log::debug;

use crate::data_input::sample_data::Sample;
use crate::errors::{AnalysisError, Result};
use crate::types::Series;

/// Collapses repeated displacement readings into one point per distinct
/// displacement, with force averaged over the group. Output is sorted by
/// displacement, strictly increasing.
///
/// Grouping uses exact float equality.
pub fn aggregate_samples(samples: &[Sample]) -> Result<Series> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if let Some(index) = samples
        .iter()
        .position(|s| !s.displacement.is_finite() || !s.force.is_finite())
    {
        return Err(AnalysisError::NonFiniteSample { index });
    }

    let mut sorted: Vec<(f64, f64)> = samples.iter().map(|s| (s.displacement, s.force)).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut aggregated: Series = Vec::new();
    let mut group_x = sorted[0].0;
    let mut group_sum = 0.0;
    let mut group_count = 0usize;

    for &(x, y) in &sorted {
        if x != group_x {
            aggregated.push((group_x, group_sum / group_count as f64));
            group_x = x;
            group_sum = 0.0;
            group_count = 0;
        }
        group_sum += y;
        group_count += 1;
    }
    aggregated.push((group_x, group_sum / group_count as f64));

    debug!(
        "Aggregated {} samples into {} displacement points",
        samples.len(),
        aggregated.len()
    );
    Ok(aggregated)
}


// src/data_analysis/aggregate.rs
