// src/data_input/csv_parser.rs

use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::IngestConfig;
use crate::data_input::sample_data::{IngestedData, Sample};
use crate::errors::Result;

/// Parses a comma-delimited test record into displacement/force samples.
///
/// A row is kept only when every field parses as a finite number. Header lines,
/// comments and partially numeric rows are skipped without error, so files with
/// free-form preambles load as-is.
pub fn parse_sample_file(input_file_path: &Path, ingest: &IngestConfig) -> Result<IngestedData> {
    let file = File::open(input_file_path)?;
    let data = parse_samples_from_reader(BufReader::new(file), ingest)?;
    info!(
        "Read {} samples from '{}' ({} rows skipped).",
        data.rows_accepted,
        input_file_path.display(),
        data.rows_skipped
    );
    Ok(data)
}

/// Same as [`parse_sample_file`] for any reader.
pub fn parse_samples_from_reader<R: Read>(reader: R, ingest: &IngestConfig) -> Result<IngestedData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(b'"')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let required_fields = ingest.displacement_column.max(ingest.force_column) + 1;
    let mut data = IngestedData::default();

    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                data.rows_skipped += 1;
                continue;
            }
        };

        if record.is_empty() || record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let values: Option<Vec<f64>> = record
            .iter()
            .map(|field| field.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect();

        match values {
            Some(values) if values.len() >= required_fields => {
                data.samples.push(Sample::new(
                    values[ingest.displacement_column],
                    values[ingest.force_column],
                ));
                data.rows_accepted += 1;
            }
            Some(values) => {
                debug!(
                    "Skipping row {}: {} fields, need {}",
                    row_index + 1,
                    values.len(),
                    required_fields
                );
                data.rows_skipped += 1;
            }
            None => {
                debug!("Skipping non-numeric row {}", row_index + 1);
                data.rows_skipped += 1;
            }
        }
    }

    Ok(data)
}


// src/data_input/csv_parser.rs
