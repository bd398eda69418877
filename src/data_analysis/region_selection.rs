// src/data_analysis/region_selection.rs

use log::debug;

use crate::errors::{AnalysisError, Result};
use crate::types::LinearRegion;

/// Global force maximum of a series as (displacement, force). The first
/// occurrence wins on ties; `None` for an empty series.
pub fn global_maximum(series: &[(f64, f64)]) -> Option<(f64, f64)> {
    series.iter().copied().fold(None, |best, point| match best {
        Some((_, best_y)) if point.1 <= best_y => best,
        _ => Some(point),
    })
}

/// Chooses the primary elastic region.
///
/// A region is eligible when it ends at or before the displacement of
/// `global_max` and its end force is strictly below the maximum force. Among
/// eligible regions the widest displacement span wins, earliest on exact ties.
/// Returns the selected region and the remaining regions in list order.
pub fn select_primary_region(
    regions: &[LinearRegion],
    global_max: (f64, f64),
) -> Result<(LinearRegion, Vec<LinearRegion>)> {
    let (max_x, max_force) = global_max;
    let mut selected: Option<(usize, &LinearRegion)> = None;
    for (index, region) in regions.iter().enumerate() {
        if region.x_end > max_x || region.y_end >= max_force {
            continue;
        }
        match selected {
            Some((_, best)) if region.span() <= best.span() => {}
            _ => selected = Some((index, region)),
        }
    }

    let (index, primary) = selected.ok_or(AnalysisError::NoEligibleRegion)?;
    let others = regions
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, r)| *r)
        .collect();

    debug!(
        "Selected region {} of {} (span {:.4}) before max ({:.4}, {:.4})",
        index,
        regions.len(),
        primary.span(),
        max_x,
        max_force
    );
    Ok((*primary, others))
}

/// Slope of the region's endpoints: the effective modulus.
pub fn calculate_modulus(region: &LinearRegion) -> Result<f64> {
    let span = region.span();
    if span == 0.0 {
        return Err(AnalysisError::DegenerateRegion { x: region.x_start });
    }
    Ok((region.y_end - region.y_start) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEAK: (f64, f64) = (100.0, 10.0);

    fn region(x_start: f64, x_end: f64, y_end: f64) -> LinearRegion {
        LinearRegion {
            x_start,
            y_start: 0.0,
            x_end,
            y_end,
        }
    }

    #[test]
    fn test_widest_eligible_region_wins() {
        let regions = vec![
            region(0.0, 1.0, 5.0),
            region(2.0, 5.5, 8.0),
            region(6.0, 8.0, 9.0),
        ];
        let (primary, others) = select_primary_region(&regions, PEAK).unwrap();
        assert_eq!(primary, regions[1]);
        assert_eq!(others, vec![regions[0], regions[2]]);
    }

    #[test]
    fn test_region_reaching_max_is_ineligible() {
        let regions = vec![
            region(0.0, 1.0, 5.0),
            region(2.0, 5.5, 12.0),
            region(6.0, 8.0, 9.0),
        ];
        let (primary, others) = select_primary_region(&regions, PEAK).unwrap();
        assert_eq!(primary, regions[2]);
        assert_eq!(others.len(), 2);
    }

    #[test]
    fn test_ties_keep_first() {
        let regions = vec![region(0.0, 2.0, 1.0), region(3.0, 5.0, 2.0)];
        let (primary, _) = select_primary_region(&regions, PEAK).unwrap();
        assert_eq!(primary, regions[0]);
    }

    #[test]
    fn test_no_eligible_region() {
        let regions = vec![region(0.0, 2.0, 10.0)];
        assert!(matches!(
            select_primary_region(&regions, PEAK),
            Err(AnalysisError::NoEligibleRegion)
        ));
        assert!(matches!(
            select_primary_region(&[], PEAK),
            Err(AnalysisError::NoEligibleRegion)
        ));
    }

    #[test]
    fn test_post_peak_region_is_ineligible() {
        // The decline after the peak is wider and ends below the maximum force.
        let regions = vec![region(0.0, 2.0, 5.0), region(6.0, 20.0, 3.0)];
        let (primary, others) = select_primary_region(&regions, (4.0, 10.0)).unwrap();
        assert_eq!(primary, regions[0]);
        assert_eq!(others, vec![regions[1]]);
    }

    #[test]
    fn test_region_straddling_peak_is_ineligible() {
        let regions = vec![region(1.0, 9.0, 5.0)];
        assert!(matches!(
            select_primary_region(&regions, (5.0, 10.0)),
            Err(AnalysisError::NoEligibleRegion)
        ));

        // Ending exactly at the peak displacement is still allowed.
        let regions = vec![region(1.0, 9.0, 5.0), region(0.0, 5.0, 8.0)];
        let (primary, _) = select_primary_region(&regions, (5.0, 10.0)).unwrap();
        assert_eq!(primary, regions[1]);
    }

    #[test]
    fn test_global_maximum_first_occurrence() {
        let series = vec![(0.0, 1.0), (1.0, 4.0), (2.0, 4.0), (3.0, 2.0)];
        assert_eq!(global_maximum(&series), Some((1.0, 4.0)));
        assert_eq!(global_maximum(&[]), None);
    }

    #[test]
    fn test_modulus_slope() {
        let r = LinearRegion {
            x_start: 1.0,
            y_start: 10.0,
            x_end: 3.0,
            y_end: 16.0,
        };
        assert_eq!(calculate_modulus(&r).unwrap(), 3.0);
    }

    #[test]
    fn test_degenerate_region_guarded() {
        let r = LinearRegion {
            x_start: 2.0,
            y_start: 1.0,
            x_end: 2.0,
            y_end: 3.0,
        };
        assert!(matches!(
            calculate_modulus(&r),
            Err(AnalysisError::DegenerateRegion { .. })
        ));
    }
}

// src/data_analysis/region_selection.rs
