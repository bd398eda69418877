// tests/csv_ingestion_test.rs

use std::fs;
use std::path::PathBuf;

use tensile_analyzer::data_input::csv_parser::parse_sample_file;
use tensile_analyzer::{run_analysis, AnalysisConfig, AnalysisError, IngestConfig};

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tensile_analyzer_{}_{}.csv",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_with_preamble_runs_end_to_end() {
    let contents = "\
Test record,\"specimen 7\"
Time (s),Displacement (mm),Force (N)
0.0,0,1
0.1,1,3
0.2,2,4
0.3,2,6
0.4,3,7
0.5,4,9

0.6,5,11
0.7,6,16
0.8,7,13
0.9,8,8
1.0,9,1
end of record
";
    let path = write_temp_csv("preamble", contents);
    let data = parse_sample_file(&path, &IngestConfig::default()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(data.rows_accepted, 11);
    assert_eq!(data.rows_skipped, 3);

    let result = run_analysis(&data.samples, &AnalysisConfig::default()).unwrap();
    assert_eq!(result.extrema.len(), 1);
    assert_eq!(result.global_max, (6.0, 16.0));
    assert_eq!(result.modulus, Some(2.0));
}

#[test]
fn test_file_without_numeric_rows_is_input_error() {
    let path = write_temp_csv("headers_only", "time,displacement,force\nnot,a,number\n");
    let data = parse_sample_file(&path, &IngestConfig::default()).unwrap();
    fs::remove_file(&path).ok();

    assert!(data.samples.is_empty());
    assert!(matches!(
        run_analysis(&data.samples, &AnalysisConfig::default()),
        Err(AnalysisError::EmptyInput)
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("tensile_analyzer_does_not_exist.csv");
    assert!(matches!(
        parse_sample_file(&path, &IngestConfig::default()),
        Err(AnalysisError::Io(_))
    ));
}
