// src/data_input/sample_data.rs

/// One (displacement, force) observation read from a test record.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    pub displacement: f64,
    pub force: f64,
}

impl Sample {
    pub fn new(displacement: f64, force: f64) -> Self {
        Self {
            displacement,
            force,
        }
    }
}

/// Samples accepted from a file, in file order, with row accounting.
#[derive(Debug, Default, Clone)]
pub struct IngestedData {
    pub samples: Vec<Sample>,
    pub rows_accepted: usize,
    pub rows_skipped: usize,
}

// src/data_input/sample_data.rs
