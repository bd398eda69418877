// src/lib.rs - Library interface for the displacement/force analysis pipeline

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod errors;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;
pub mod types;

pub use config::{AnalysisConfig, IngestConfig, SmoothingStage};
pub use data_analysis::pipeline::{run_analysis, AnalysisResult};
pub use data_input::sample_data::Sample;
pub use errors::{AnalysisError, Result};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
