// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MARKER_LABEL, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MARKER_RADIUS_PX, PLOT_HEIGHT,
    PLOT_WIDTH,
};
use crate::types::PanelPlotData;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded x and y ranges covering every point of every series.
pub fn series_ranges<'a, I>(series: I) -> Option<(Range<f64>, Range<f64>)>
where
    I: IntoIterator<Item = &'a [(f64, f64)]>,
{
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for &(x, y) in series.into_iter().flatten() {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, x, y, y),
            Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        });
    }
    bounds.map(|(x0, x1, y0, y1)| {
        let (x_min, x_max) = calculate_range(x0, x1);
        let (y_min, y_max) = calculate_range(y0, y1);
        (x_min..x_max, y_min..y_max)
    })
}

/// Format Y-axis labels with "k" and "M" notation for large values.
pub fn format_y_axis_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{panel_name} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A labelled point drawn as a filled circle (extrema, global maximum).
#[derive(Clone)]
pub struct PlotMarker {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: RGBColor,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub markers: Vec<PlotMarker>,
}

/// Draws a single chart from a PlotConfig: line series with legend, then markers.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_axis_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;

        // Only add legend if label is not empty
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    for marker in &plot_config.markers {
        if !marker.x.is_finite() || !marker.y.is_finite() {
            continue;
        }
        chart.draw_series(std::iter::once(Circle::new(
            (marker.x, marker.y),
            MARKER_RADIUS_PX,
            marker.color.filled(),
        )))?;
        if !marker.label.is_empty() {
            chart.draw_series(std::iter::once(Text::new(
                marker.label.clone(),
                (marker.x, marker.y),
                ("sans-serif", FONT_SIZE_MARKER_LABEL)
                    .into_font()
                    .color(&BLACK),
            )))?;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

fn draw_main_title(
    root_area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    Ok(())
}

/// Creates a single-chart plot image.
pub fn draw_single_plot<'a>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    plot_config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    draw_main_title(&root_area, root_name)?;
    let area = root_area.margin(50, 5, 5, 5);

    let plotted = match plot_config {
        Some(config) => {
            let has_data = config.series.iter().any(|s| !s.data.is_empty());
            let valid_ranges =
                config.x_range.end > config.x_range.start && config.y_range.end > config.y_range.start;
            if has_data && valid_ranges {
                draw_single_chart_with_config(&area, config)?;
                true
            } else {
                let reason = if !has_data {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(&area, plot_type_name, reason)?;
                false
            }
        }
        None => {
            draw_unavailable_message(&area, plot_type_name, "Calculation/Data Extraction Failed")?;
            false
        }
    };

    root_area.present()?;
    if plotted {
        println!("  Plot saved as '{output_filename}'.");
    } else {
        println!("  '{output_filename}' saved with placeholder message only: no data to plot.");
    }
    Ok(())
}

/// Creates a stacked plot image with one row per panel name.
pub fn draw_stacked_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    panel_names: &[&str],
    mut get_panel_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PanelPlotData>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    draw_main_title(&root_area, root_name)?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panel_names.len(), 1));
    let mut any_panel_plotted = false;

    for (panel_index, panel_name) in panel_names.iter().enumerate() {
        let area = &sub_plot_areas[panel_index];
        match get_panel_plot_data(panel_index) {
            Some((chart_title, x_range, y_range, series_data, x_label, y_label)) => {
                let has_data = series_data.iter().any(|s| !s.data.is_empty());
                let valid_ranges = x_range.end > x_range.start && y_range.end > y_range.start;
                if has_data && valid_ranges {
                    let temp_plot_config = PlotConfig {
                        title: chart_title,
                        x_range,
                        y_range,
                        series: series_data,
                        x_label,
                        y_label,
                        markers: vec![],
                    };
                    draw_single_chart_with_config(area, &temp_plot_config)?;
                    any_panel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, panel_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, panel_name, "Calculation/Data Extraction Failed")?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        println!("  '{output_filename}' saved with placeholder messages only: no data to plot.");
    }
    Ok(())
}


// src/plot_framework.rs
