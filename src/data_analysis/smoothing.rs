// src/data_analysis/smoothing.rs

use ndarray::Array1;

use crate::errors::{AnalysisError, Result};
use crate::types::Series;

/// Applies a trailing moving average to a 1D array of f64.
///
/// The first `window_size` outputs average over a growing window `[0..=i]`;
/// after that each output is the mean of the trailing `window_size` values,
/// maintained as a running sum.
pub fn moving_average_smooth_f64(data: &Array1<f64>, window_size: usize) -> Result<Array1<f64>> {
    if window_size == 0 || window_size > data.len() {
        return Err(AnalysisError::InvalidWindow {
            window: window_size,
            len: data.len(),
        });
    }

    let mut smoothed_data = Array1::<f64>::zeros(data.len());
    let mut current_sum: f64 = 0.0;

    for i in 0..window_size {
        current_sum += data[i];
        smoothed_data[i] = current_sum / (i + 1) as f64;
    }
    for i in window_size..data.len() {
        current_sum = current_sum - data[i - window_size] + data[i];
        smoothed_data[i] = current_sum / window_size as f64;
    }
    Ok(smoothed_data)
}

/// Smooths the y values of a series, keeping its x values.
pub fn smooth_series(series: &[(f64, f64)], window_size: usize) -> Result<Series> {
    let forces: Array1<f64> = series.iter().map(|&(_, y)| y).collect();
    let smoothed = moving_average_smooth_f64(&forces, window_size)?;
    Ok(series
        .iter()
        .zip(smoothed.iter())
        .map(|(&(x, _), &y)| (x, y))
        .collect())
}


// src/data_analysis/smoothing.rs
