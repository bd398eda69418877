// src/report.rs

use std::fmt::Write;

use crate::data_analysis::pipeline::AnalysisResult;

/// Formats the human-readable summary of one analysis run.
pub fn format_report(result: &AnalysisResult, root_name: &str) -> String {
    let mut out = String::new();
    write_report(&mut out, result, root_name).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, result: &AnalysisResult, root_name: &str) -> std::fmt::Result {
    writeln!(out, "=== {root_name} ===")?;
    writeln!(
        out,
        "Points analysed: {} ({})",
        result.analysed_series().len(),
        if result.smoothed.is_some() {
            "smoothed"
        } else {
            "aggregated"
        }
    )?;

    writeln!(out, "\nLocal extrema:")?;
    writeln!(out, "  Kind\t\tDispl.\t\tForce")?;
    if result.extrema.is_empty() {
        writeln!(out, "  (none found)")?;
    }
    for e in &result.extrema {
        writeln!(out, "  {}\t{:.6}\t{:.6}", e.kind.name(), e.x, e.y)?;
    }

    let (max_x, max_y) = result.global_max;
    writeln!(out, "\nGlobal maximum: force {max_y:.6} at displacement {max_x:.6}")?;

    match result.modulus {
        Some(m) => writeln!(out, "Modulus (slope of primary linear region): {m:.6}")?,
        None => writeln!(out, "Modulus (slope of primary linear region): undefined")?,
    }

    match result.primary_region {
        Some(r) => {
            writeln!(
                out,
                "Primary linear region: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
                r.x_start, r.y_start, r.x_end, r.y_end
            )?;
            writeln!(out, "Characteristic force at end of linear region: {:.6}", r.y_end)?;
        }
        None => writeln!(out, "Primary linear region: not found")?,
    }
    writeln!(out, "Other linear regions: {}", result.other_regions.len())?;

    for note in &result.notes {
        writeln!(out, "Note: {note}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Extremum, ExtremumKind, LinearRegion};

    fn base_result() -> AnalysisResult {
        AnalysisResult {
            aggregated: vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)],
            smoothed: None,
            first_difference: vec![(2.0, 2.0)],
            second_difference: vec![(1.0, -3.0)],
            extrema: vec![Extremum {
                x: 1.0,
                y: 3.0,
                kind: ExtremumKind::LocalMax,
            }],
            other_regions: vec![],
            primary_region: None,
            global_max: (1.0, 3.0),
            modulus: None,
            notes: vec!["No locally linear points below the second-difference threshold".into()],
        }
    }

    #[test]
    fn test_undefined_modulus_is_stated() {
        let report = format_report(&base_result(), "specimen");
        assert!(report.contains("=== specimen ==="));
        assert!(report.contains("undefined"));
        assert!(report.contains("Primary linear region: not found"));
        assert!(report.contains("Note: No locally linear points"));
        assert!(report.contains("local max\t1.000000\t3.000000"));
    }

    #[test]
    fn test_primary_region_endpoints_listed() {
        let mut result = base_result();
        result.primary_region = Some(LinearRegion {
            x_start: 1.0,
            y_start: 10.0,
            x_end: 3.0,
            y_end: 16.0,
        });
        result.modulus = Some(3.0);
        result.notes.clear();
        let report = format_report(&result, "specimen");
        assert!(report.contains("Modulus (slope of primary linear region): 3.000000"));
        assert!(report.contains("(1.000000, 10.000000) -> (3.000000, 16.000000)"));
        assert!(report.contains("Characteristic force at end of linear region: 16.000000"));
        assert!(!report.contains("Note:"));
    }
}

// src/report.rs
