// src/plot_functions/mod.rs

pub mod plot_differences;
pub mod plot_force_displacement;

// src/plot_functions/mod.rs
