// src/plot_functions/plot_differences.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_FIRST_DIFFERENCE, COLOR_SECOND_DIFFERENCE, COLOR_THRESHOLD_LINE, LINE_WIDTH_PLOT,
};
use crate::data_analysis::pipeline::AnalysisResult;
use crate::plot_framework::{calculate_range, draw_stacked_plot, PlotSeries};
use crate::types::{PanelPlotData, Series};

pub const DIFFERENCE_PANELS: [&str; 2] = ["First Difference", "Second Difference"];

/// Symmetric y half-range covering both the data and the threshold guide.
fn symmetric_half_range(series: &[(f64, f64)], threshold: f64) -> f64 {
    let magnitudes: Array1<f64> = series
        .iter()
        .map(|&(_, v)| v.abs())
        .filter(|v| v.is_finite())
        .collect();
    let data_max = magnitudes.max().copied().unwrap_or(0.0);
    let half = data_max.max(threshold);
    if half > 0.0 {
        half * 1.15
    } else {
        0.5
    }
}

fn x_bounds(series: &[(f64, f64)]) -> Option<(f64, f64)> {
    let first = series.first()?.0;
    let last = series.last()?.0;
    Some(calculate_range(first, last))
}

/// Builds the panel data for one difference series. Panel 1 carries the
/// ±threshold guide lines.
pub fn difference_panel(
    panel_index: usize,
    series: &Series,
    linearity_threshold: f64,
) -> Option<PanelPlotData> {
    let (x_min, x_max) = x_bounds(series)?;
    let is_second = panel_index == 1;
    let guide = if is_second { linearity_threshold } else { 0.0 };
    let half = symmetric_half_range(series, guide);

    let mut plot_series = vec![PlotSeries {
        data: series.clone(),
        label: DIFFERENCE_PANELS[panel_index].to_string(),
        color: if is_second {
            *COLOR_SECOND_DIFFERENCE
        } else {
            *COLOR_FIRST_DIFFERENCE
        },
        stroke_width: LINE_WIDTH_PLOT,
    }];
    if is_second {
        plot_series.push(PlotSeries {
            data: vec![(x_min, guide), (x_max, guide)],
            label: format!("±{guide} linearity threshold"),
            color: *COLOR_THRESHOLD_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        });
        plot_series.push(PlotSeries {
            data: vec![(x_min, -guide), (x_max, -guide)],
            label: String::new(),
            color: *COLOR_THRESHOLD_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    Some((
        DIFFERENCE_PANELS[panel_index].to_string(),
        x_min..x_max,
        -half..half,
        plot_series,
        "Displacement".to_string(),
        "Δ Force".to_string(),
    ))
}

/// Generates the stacked first/second difference plot.
pub fn plot_differences(
    result: &AnalysisResult,
    root_name: &str,
    output_dir: &Path,
    linearity_threshold: f64,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir
        .join(format!("{root_name}_Differences_stacked.png"))
        .to_string_lossy()
        .into_owned();
    let panels = [
        result.first_difference.clone(),
        result.second_difference.clone(),
    ];

    draw_stacked_plot(&output_file, root_name, &DIFFERENCE_PANELS, move |panel_index| {
        difference_panel(panel_index, &panels[panel_index], linearity_threshold)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_panel_has_threshold_guides() {
        let series = vec![(1.0, 0.2), (2.0, -3.0), (3.0, 0.1)];
        let (title, _, y_range, plot_series, _, _) = difference_panel(1, &series, 1.5).unwrap();
        assert_eq!(title, "Second Difference");
        assert_eq!(plot_series.len(), 3);
        assert_eq!(plot_series[1].data[0].1, 1.5);
        assert_eq!(plot_series[2].data[0].1, -1.5);
        assert!(y_range.end >= 3.0 && y_range.start <= -3.0);
    }

    #[test]
    fn test_first_panel_without_guides() {
        let series = vec![(2.0, 0.0), (3.0, 0.0)];
        let (_, _, y_range, plot_series, _, _) = difference_panel(0, &series, 1.5).unwrap();
        assert_eq!(plot_series.len(), 1);
        assert_eq!(y_range, -0.5..0.5);
    }

    #[test]
    fn test_empty_series_has_no_panel() {
        assert!(difference_panel(0, &vec![], 1.5).is_none());
    }
}

// src/plot_functions/plot_differences.rs
