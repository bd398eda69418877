// src/plot_functions/plot_force_displacement.rs

use plotters::style::RGBColor;
use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_EXTREMUM_MAX, COLOR_EXTREMUM_MIN, COLOR_FORCE_AGGREGATED, COLOR_FORCE_SMOOTHED,
    COLOR_GLOBAL_MAX, COLOR_OTHER_REGION, COLOR_PRIMARY_REGION, LINE_WIDTH_OTHER_REGION,
    LINE_WIDTH_PLOT, LINE_WIDTH_PRIMARY_REGION,
};
use crate::data_analysis::pipeline::AnalysisResult;
use crate::plot_framework::{draw_single_plot, series_ranges, PlotConfig, PlotMarker, PlotSeries};
use crate::types::{ExtremumKind, LinearRegion};

fn region_series(region: &LinearRegion, label: String, color: RGBColor, stroke_width: u32) -> PlotSeries {
    PlotSeries {
        data: vec![(region.x_start, region.y_start), (region.x_end, region.y_end)],
        label,
        color,
        stroke_width,
    }
}

/// Builds the force-vs-displacement chart: force curves, linear regions as
/// straight segments, extrema and the global maximum as markers.
pub fn force_displacement_config(result: &AnalysisResult) -> Option<PlotConfig> {
    let mut series = vec![PlotSeries {
        data: result.aggregated.clone(),
        label: "Force (aggregated)".to_string(),
        color: *COLOR_FORCE_AGGREGATED,
        stroke_width: LINE_WIDTH_PLOT,
    }];
    if let Some(smoothed) = &result.smoothed {
        series.push(PlotSeries {
            data: smoothed.clone(),
            label: "Force (smoothed)".to_string(),
            color: *COLOR_FORCE_SMOOTHED,
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    // Legend entry only on the first of the other regions
    for (i, region) in result.other_regions.iter().enumerate() {
        let label = if i == 0 { "Other linear regions".to_string() } else { String::new() };
        series.push(region_series(region, label, *COLOR_OTHER_REGION, LINE_WIDTH_OTHER_REGION));
    }
    if let Some(primary) = &result.primary_region {
        let label = match result.modulus {
            Some(m) => format!("Primary linear region (modulus {m:.3})"),
            None => "Primary linear region".to_string(),
        };
        series.push(region_series(primary, label, *COLOR_PRIMARY_REGION, LINE_WIDTH_PRIMARY_REGION));
    }

    let (x_range, y_range) = series_ranges(series.iter().map(|s| s.data.as_slice()))?;

    let mut markers: Vec<PlotMarker> = result
        .extrema
        .iter()
        .map(|e| PlotMarker {
            x: e.x,
            y: e.y,
            label: format!("({:.3}, {:.3})", e.x, e.y),
            color: match e.kind {
                ExtremumKind::LocalMax => *COLOR_EXTREMUM_MAX,
                ExtremumKind::LocalMin => *COLOR_EXTREMUM_MIN,
            },
        })
        .collect();
    let (max_x, max_y) = result.global_max;
    markers.push(PlotMarker {
        x: max_x,
        y: max_y,
        label: format!("Max {max_y:.3}"),
        color: *COLOR_GLOBAL_MAX,
    });

    Some(PlotConfig {
        title: "Force vs Displacement".to_string(),
        x_range,
        y_range,
        series,
        x_label: "Displacement".to_string(),
        y_label: "Force".to_string(),
        markers,
    })
}

/// Generates the Force vs Displacement plot with extrema and linear regions.
pub fn plot_force_displacement(
    result: &AnalysisResult,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir
        .join(format!("{root_name}_ForceDisplacement.png"))
        .to_string_lossy()
        .into_owned();
    let plot_config = force_displacement_config(result);
    draw_single_plot(&output_file, root_name, "Force/Displacement", plot_config.as_ref())
}


// src/plot_functions/plot_force_displacement.rs
