// src/data_analysis/mod.rs

pub mod aggregate;
pub mod derivative;
pub mod linear_regions;
pub mod pipeline;
pub mod region_selection;
pub mod smoothing;

// src/data_analysis/mod.rs
