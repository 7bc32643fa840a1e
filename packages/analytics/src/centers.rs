//! Center dissolution, noise filtering, and tiering.
//!
//! Significant cells are dissolved into connected polygons, each polygon
//! becomes a candidate center carrying the activity of its composing
//! cells, low-activity candidates are discarded as noise, and the
//! survivors are graded into tiers by a composite of area and activity.

use center_map_analytics_models::{CellMetrics, CenterTier, SECONDARY_AREA_THRESHOLD};
use center_map_spatial::Fishnet;
use geo::{Area, Contains, MultiPolygon, Point, Polygon, unary_union};

use crate::AnalyticsError;

/// One connected candidate center.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Dissolved polygon covering the member cells.
    pub geometry: Polygon<f64>,
    /// Indexes of the significant cells composing the polygon.
    pub cell_indexes: Vec<usize>,
    /// Polygon area in square meters.
    pub area: f64,
    /// Total POI count of the member cells.
    pub poi_count: usize,
}

/// A candidate that survived the noise filter, with its tier.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedCandidate {
    /// The underlying candidate.
    pub candidate: Candidate,
    /// Composite score of relative area and relative activity.
    pub composite: f64,
    /// Assigned tier.
    pub tier: CenterTier,
}

/// Dissolves significant cells into candidate centers and drops noise.
///
/// A candidate whose activity is at or below `noise_threshold` times the
/// total activity of all occupied cells is discarded. No significant cell
/// at all is a valid empty result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dissolve(
    cells: &[CellMetrics],
    fishnet: &Fishnet,
    noise_threshold: f64,
) -> Vec<Candidate> {
    let significant: Vec<&CellMetrics> = cells.iter().filter(|c| c.significant).collect();
    if significant.is_empty() {
        log::info!("No significant cells; the study area has no centers");
        return Vec::new();
    }

    let polygons: Vec<Polygon<f64>> = significant
        .iter()
        .map(|c| fishnet.cells[c.cell_index].polygon())
        .collect();
    let dissolved: MultiPolygon<f64> = unary_union(polygons.iter());

    // Group member cells by the exploded polygon containing their center.
    let mut candidates: Vec<Candidate> = dissolved
        .0
        .into_iter()
        .map(|geometry| Candidate {
            area: geometry.unsigned_area(),
            geometry,
            cell_indexes: Vec::new(),
            poi_count: 0,
        })
        .collect();
    for cell in &significant {
        let center = fishnet.cells[cell.cell_index].rect.center();
        if let Some(candidate) = candidates
            .iter_mut()
            .find(|c| c.geometry.contains(&Point::new(center.x, center.y)))
        {
            candidate.cell_indexes.push(cell.cell_index);
            candidate.poi_count += cell.poi_count;
        }
    }

    let total_activity: usize = cells.iter().map(|c| c.poi_count).sum();
    let cutoff = noise_threshold * total_activity as f64;
    let before = candidates.len();
    candidates.retain(|c| c.poi_count as f64 > cutoff);

    log::info!(
        "Dissolved {} significant cells into {before} candidates; {} survive the noise cutoff of {cutoff:.1} POIs",
        significant.len(),
        candidates.len(),
    );

    candidates
}

/// Grades surviving candidates into tiers.
///
/// The composite score is half the relative area plus half the relative
/// activity; a score of exactly 1 marks the primary center, which only
/// exists when one candidate holds both maxima. Larger non-primary
/// candidates become secondary centers, the rest clusters.
///
/// # Errors
///
/// Returns [`AnalyticsError::DegenerateCenterExtent`] when the maximum
/// area or activity over the candidates is zero.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn grade(candidates: Vec<Candidate>) -> Result<Vec<GradedCandidate>, AnalyticsError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let max_area = candidates.iter().map(|c| c.area).fold(0.0_f64, f64::max);
    let max_count = candidates.iter().map(|c| c.poi_count).max().unwrap_or(0);
    if max_area <= 0.0 || max_count == 0 {
        return Err(AnalyticsError::DegenerateCenterExtent);
    }

    Ok(candidates
        .into_iter()
        .map(|candidate| {
            let composite = 0.5_f64.mul_add(
                candidate.area / max_area,
                0.5 * (candidate.poi_count as f64 / max_count as f64),
            );
            let tier = if composite == 1.0 {
                CenterTier::Primary
            } else if candidate.area > SECONDARY_AREA_THRESHOLD {
                CenterTier::Secondary
            } else {
                CenterTier::Cluster
            };
            GradedCandidate {
                candidate,
                composite,
                tier,
            }
        })
        .collect())
}
