// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, LIGHTBLUE, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// --- Analysis Defaults ---

// Forces below this value are treated as pre-test noise (no extrema, no segmentation).
pub const DEFAULT_FORCE_GATE: f64 = 0.5;
// Upper bound on |second difference| for a point to count as locally linear.
pub const DEFAULT_LINEARITY_THRESHOLD: f64 = 1.5;
// Absorbs floating-point drift when comparing displacement spacing.
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-6;
// Nominal spacing is this multiple of the first aggregated displacement step,
// since differencing shifts second-difference entries by one sample.
pub const SPACING_MULTIPLIER: f64 = 2.0;
// First and second differences need three consecutive points.
pub const MIN_SERIES_LEN: usize = 3;

// --- Ingestion Defaults ---
// Record layout is `time, displacement, force`.
pub const DEFAULT_DISPLACEMENT_COLUMN: usize = 1;
pub const DEFAULT_FORCE_COLUMN: usize = 2;

// --- Plot Dimensions ---
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// --- Font Sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_SIZE_MARKER_LABEL: i32 = 14;

// --- Plot Color Assignments ---
pub const COLOR_FORCE_AGGREGATED: &RGBColor = &LIGHTBLUE;
pub const COLOR_FORCE_SMOOTHED: &RGBColor = &BLUE;
pub const COLOR_EXTREMUM_MAX: &RGBColor = &RED;
pub const COLOR_EXTREMUM_MIN: &RGBColor = &PURPLE;
pub const COLOR_GLOBAL_MAX: &RGBColor = &ORANGE;
pub const COLOR_PRIMARY_REGION: &RGBColor = &GREEN;
pub const COLOR_OTHER_REGION: &RGBColor = &GREY;
pub const COLOR_FIRST_DIFFERENCE: &RGBColor = &BLUE;
pub const COLOR_SECOND_DIFFERENCE: &RGBColor = &PURPLE;
pub const COLOR_THRESHOLD_LINE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_PRIMARY_REGION: u32 = 4;
pub const LINE_WIDTH_OTHER_REGION: u32 = 2;

// Marker radius in pixels for extrema and the global maximum.
pub const MARKER_RADIUS_PX: i32 = 5;

// src/constants.rs
