// src/types.rs
// Shared data types passed between pipeline stages and the rendering/report consumers.

/// Ordered (x, y) pairs. After aggregation x is strictly increasing.
pub type Series = Vec<(f64, f64)>;

// Rendering panel data: title, x range, y range, series, x label, y label.
pub type PanelPlotData = (
    String,
    std::ops::Range<f64>,
    std::ops::Range<f64>,
    Vec<crate::plot_framework::PlotSeries>,
    String,
    String,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    LocalMin,
    LocalMax,
}

impl ExtremumKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExtremumKind::LocalMin => "local min",
            ExtremumKind::LocalMax => "local max",
        }
    }
}

/// A turning point of the force curve, reported at the vertex sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub x: f64,
    pub y: f64,
    pub kind: ExtremumKind,
}

/// One second-difference entry together with the midpoint the segmenter uses
/// as a region endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvaturePoint {
    pub x: f64,     // Displacement of the centre sample, x[i-1].
    pub value: f64, // Second difference (d1 - d2).
    pub x_mid: f64, // (x[i-2] + x[i]) / 2
    pub y_mid: f64, // (y[i-2] + y[i]) / 2
}

/// Contiguous run of locally linear points. Invariant: `x_start < x_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegion {
    pub x_start: f64,
    pub y_start: f64,
    pub x_end: f64,
    pub y_end: f64,
}

impl LinearRegion {
    /// Displacement range covered by the region.
    pub fn span(&self) -> f64 {
        self.x_end - self.x_start
    }
}

// src/types.rs
