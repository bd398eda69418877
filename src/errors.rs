// src/errors.rs

//! Error types for the analysis pipeline and its ingestion collaborator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    // --- Input errors (fatal) ---
    #[error("Input error: sample sequence is empty")]
    EmptyInput,

    #[error("Input error: non-finite value in sample {index}")]
    NonFiniteSample { index: usize },

    #[error("Input error: need at least {required} distinct displacement points, have {available}")]
    InsufficientData { required: usize, available: usize },

    // --- Configuration errors (fatal) ---
    #[error("Configuration error: smoothing window {window} is invalid for a sequence of length {len}")]
    InvalidWindow { window: usize, len: usize },

    #[error("Configuration error: {name} = {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    // --- Result-level absences ---
    #[error("No local extrema above the force gate")]
    NoExtremaFound,

    #[error("No locally linear points below the second-difference threshold")]
    NoLinearRegionFound,

    #[error("No linear region ends before the global force maximum")]
    NoEligibleRegion,

    #[error("Degenerate linear region at displacement {x}: zero displacement span")]
    DegenerateRegion { x: f64 },

    // --- Ingestion ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnalysisError {
    /// True when the run cannot proceed; false for "nothing to report" conditions
    /// that the pipeline turns into absent result fields.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AnalysisError::NoExtremaFound
                | AnalysisError::NoLinearRegionFound
                | AnalysisError::NoEligibleRegion
                | AnalysisError::DegenerateRegion { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Config(e.to_string())
    }
}
