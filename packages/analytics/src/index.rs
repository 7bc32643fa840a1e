//! Per-cell index calculation.
//!
//! Computes, for every occupied cell, the activity density score, the
//! entropy-based functional diversity score, and the centrality index the
//! hotspot stage tests for clustering.

use std::collections::BTreeMap;

use center_map_analytics_models::CellMetrics;
use center_map_poi_models::{Poi, Subtype};
use center_map_spatial::Fishnet;

use crate::AnalyticsError;

/// Default cell area in hectares, the denominator of the raw density.
///
/// The constant cancels under the max normalization, so the scores are
/// identical for any positive value; it is kept for the readable
/// intermediate densities in the metrics table.
pub const DEFAULT_CELL_AREA_HECTARES: f64 = 25.0;

/// Calculates the index table over the occupied cells.
///
/// # Errors
///
/// * [`AnalyticsError::NoOccupiedCells`] when the joined map is empty.
/// * [`AnalyticsError::SingleGlobalSubtype`] when one subtype covers the
///   whole study area.
/// * [`AnalyticsError::NoDiversityReference`] when every occupied cell is
///   single-subtype.
#[allow(clippy::cast_precision_loss)]
pub fn calculate(
    joined: &BTreeMap<usize, Vec<Poi>>,
    fishnet: &Fishnet,
) -> Result<Vec<CellMetrics>, AnalyticsError> {
    if joined.is_empty() {
        return Err(AnalyticsError::NoOccupiedCells);
    }

    let global_subtypes: std::collections::BTreeSet<Subtype> = joined
        .values()
        .flatten()
        .filter_map(|poi| poi.class.subtype)
        .collect();
    if global_subtypes.len() <= 1 {
        return Err(AnalyticsError::SingleGlobalSubtype);
    }
    let ln_global = (global_subtypes.len() as f64).ln();

    struct Partial {
        cell_index: usize,
        poi_count: usize,
        density: f64,
        distinct_subtypes: usize,
        raw_diversity: f64,
        diversity_score: Option<f64>,
    }

    let mut partials: Vec<Partial> = Vec::with_capacity(joined.len());
    for (&cell_index, pois) in joined {
        let mut per_subtype: BTreeMap<Subtype, usize> = BTreeMap::new();
        for poi in pois {
            if let Some(subtype) = poi.class.subtype {
                *per_subtype.entry(subtype).or_default() += 1;
            }
        }

        let total = pois.len() as f64;
        let entropy: f64 = per_subtype
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -(p * p.ln())
            })
            .sum();
        let raw_diversity = entropy / ln_global;

        let distinct_subtypes = per_subtype.len();
        let diversity_score = if distinct_subtypes == 1 {
            None
        } else {
            Some(raw_diversity / (distinct_subtypes as f64).ln())
        };

        partials.push(Partial {
            cell_index,
            poi_count: pois.len(),
            density: pois.len() as f64 / DEFAULT_CELL_AREA_HECTARES,
            distinct_subtypes,
            raw_diversity,
            diversity_score,
        });
    }

    // Single-subtype cells inherit half the smallest positive raw
    // diversity observed elsewhere.
    let min_positive_raw = partials
        .iter()
        .map(|p| p.raw_diversity)
        .filter(|&raw| raw > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !min_positive_raw.is_finite() {
        return Err(AnalyticsError::NoDiversityReference);
    }
    let single_subtype_score = min_positive_raw / 2.0;

    let max_density = partials.iter().map(|p| p.density).fold(0.0_f64, f64::max);

    let metrics = partials
        .into_iter()
        .map(|partial| {
            let cell = &fishnet.cells[partial.cell_index];
            let density_score = partial.density / max_density;
            let diversity_score = partial.diversity_score.unwrap_or(single_subtype_score);
            CellMetrics {
                cell_index: partial.cell_index,
                row: cell.row,
                col: cell.col,
                poi_count: partial.poi_count,
                density: partial.density,
                density_score,
                distinct_subtypes: partial.distinct_subtypes,
                raw_diversity: partial.raw_diversity,
                diversity_score,
                centrality: density_score * diversity_score,
                z_score: 0.0,
                p_value: 1.0,
                significant: false,
            }
        })
        .collect::<Vec<_>>();

    log::info!(
        "Calculated indexes for {} occupied cells ({} distinct subtypes in the study area)",
        metrics.len(),
        global_subtypes.len(),
    );

    Ok(metrics)
}
