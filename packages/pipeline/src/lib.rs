#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! End-to-end urban center identification.
//!
//! Chains the stages over one study area: fishnet construction, POI
//! normalization and classification, the point-in-cell join, per-cell
//! index calculation, hotspot detection, center dissolution and tiering,
//! and the location-quotient function grading. Identical inputs always
//! produce identical outputs.

use center_map_analytics::{AnalyticsError, centers, function, hotspot, index};
use center_map_analytics_models::{AnalysisOutput, AnalysisParams, ConfigurationError};
use center_map_poi_models::RawPoi;
use center_map_spatial::{Boundary, Fishnet, GridIndex, SpatialError};
use center_map_taxonomy::{TaxonomyError, normalize};
use thiserror::Error;

/// Anything that can stop a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A parameter failed validation before any computation started.
    #[error("configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The boundary or grid could not be built.
    #[error("grid construction: {0}")]
    Grid(#[from] SpatialError),

    /// The POI data thinned out to nothing.
    #[error("input data: {0}")]
    Data(#[from] TaxonomyError),

    /// The index or center math hit a degenerate input.
    #[error("computation: {0}")]
    Computation(#[from] AnalyticsError),
}

/// Runs the full analysis over one boundary and POI batch.
///
/// `project` maps WGS84 (longitude, latitude) to the planar coordinates
/// the boundary is expressed in.
///
/// # Errors
///
/// Returns [`PipelineError::Configuration`] for out-of-range parameters
/// before any computation, [`PipelineError::Data`] when filtering leaves
/// no usable POIs, and [`PipelineError::Computation`] for degenerate
/// index or center math. An input with no significant cells is not an
/// error; it yields an output with no centers.
pub fn run<P>(
    boundary: &Boundary,
    project: P,
    raws: Vec<RawPoi>,
    params: &AnalysisParams,
) -> Result<AnalysisOutput, PipelineError>
where
    P: FnMut(f64, f64) -> (f64, f64),
{
    params.validate()?;
    log::info!(
        "Starting analysis: {} raw POIs, {} m cells, {} contiguity",
        raws.len(),
        params.cell_size,
        params.adjacency,
    );

    let fishnet = Fishnet::build(boundary, params.cell_size)?;

    let (pois, mut stats) =
        normalize::normalize(raws, project, |x, y| boundary.contains(x, y))?;
    let pois = normalize::classify_batch(pois, &mut stats)?;

    let joined = GridIndex::build(&fishnet).join(pois);

    let mut cells = index::calculate(&joined, &fishnet)?;
    hotspot::detect(&mut cells, params.adjacency, params.p_threshold);

    let candidates = centers::dissolve(&cells, &fishnet, params.noise_threshold);
    let graded = centers::grade(candidates)?;
    let (centers, quotients) = function::decide(graded, &joined, params.mixed_use_threshold);

    log::info!(
        "Analysis finished: {} centers, {} location-quotient rows, {} occupied cells",
        centers.len(),
        quotients.len(),
        cells.len(),
    );

    Ok(AnalysisOutput {
        centers,
        quotients,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use center_map_analytics_models::{CenterFunction, CenterTier};
    use center_map_poi_models::MidFunction;
    use center_map_spatial::Boundary;
    use geo::{MultiPolygon, polygon};

    use super::*;

    fn square_boundary(side: f64) -> Boundary {
        Boundary::from_projected(MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: side, y: 0.0),
            (x: side, y: side),
            (x: 0.0, y: side),
        ]]))
        .unwrap()
    }

    fn identity(x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    struct RawBuilder {
        raws: Vec<RawPoi>,
    }

    impl RawBuilder {
        fn new() -> Self {
            Self { raws: Vec::new() }
        }

        fn add(&mut self, category: &str, x: f64, y: f64) {
            let id = self.raws.len();
            self.raws.push(RawPoi {
                id: id.to_string(),
                name: format!("poi {id}"),
                address: format!("addr {id}"),
                category: category.to_string(),
                longitude: x,
                latitude: y,
            });
        }

        /// Fills one 500 m cell whose low corner is (`x0`, `y0`) with
        /// `count` POIs per category, laid out on a small interior lattice.
        fn fill_cell(&mut self, x0: f64, y0: f64, categories: &[&str], count: usize) {
            let mut slot = 0_usize;
            for &category in categories {
                for _ in 0..count {
                    #[allow(clippy::cast_precision_loss)]
                    let (dx, dy) = ((slot % 20) as f64 * 15.0, (slot / 20) as f64 * 15.0);
                    self.add(category, x0 + 100.0 + dx, y0 + 100.0 + dy);
                    slot += 1;
                }
            }
        }
    }

    const RETAIL_MIX: &[&str] = &[
        "Shopping Service;Shopping Plaza;",
        "Shopping Service;Supermarket;",
        "Food & Beverages;Chinese Food Restaurant;",
        "Medical Service;Clinic;",
    ];
    const RESIDENTIAL_MIX: &[&str] = &[
        "Commercial House;Residential Area;",
        "Commercial House;Residential Area;",
        "Commercial House;Residential Area;",
        "Accommodation Service;Hostel;",
    ];

    /// Two dense mixed-use blocks far apart, plus scattered background
    /// POIs that must not become centers. The grid puts cell corners at
    /// multiples of 500 starting from x = 100 (after the 100 m margin).
    fn two_blocks(b: &mut RawBuilder) {
        // 3x3 retail-heavy block near (2000, 2000), 20 POIs per cell.
        for i in 0..3 {
            for j in 0..3 {
                let (i, j) = (f64::from(i), f64::from(j));
                b.fill_cell(1600.0 + i * 500.0, 1600.0 + j * 500.0, RETAIL_MIX, 5);
            }
        }

        // 2x2 residential block near (7500, 7500).
        for i in 0..2 {
            for j in 0..2 {
                let (i, j) = (f64::from(i), f64::from(j));
                b.fill_cell(7100.0 + i * 500.0, 7100.0 + j * 500.0, RESIDENTIAL_MIX, 5);
            }
        }

        // Isolated background cells along two distant rows.
        for k in 0..20 {
            let x = 350.0 + f64::from(k) * 500.0;
            b.add("Tourist Attraction;Park & Square;", x, 9350.0);
        }
        // Hostels outside the residential block keep the lodging share
        // diluted, so the block's dominant function is residential.
        for k in 0..10 {
            let x = 4350.0 + f64::from(k) * 500.0;
            b.add("Accommodation Service;Hostel;", x, 350.0);
        }
    }

    fn clustered_raws() -> Vec<RawPoi> {
        let mut b = RawBuilder::new();
        two_blocks(&mut b);
        b.raws
    }

    /// The two-block layout plus a marginal 2x2 block near (7500, 2000):
    /// 16 POIs per cell, dense and diverse enough to register as a
    /// hotspot, but only 64 POIs in total.
    fn three_block_raws() -> Vec<RawPoi> {
        let mut b = RawBuilder::new();
        two_blocks(&mut b);

        for i in 0..2 {
            for j in 0..2 {
                let (i, j) = (f64::from(i), f64::from(j));
                b.fill_cell(7100.0 + i * 500.0, 1600.0 + j * 500.0, RETAIL_MIX, 4);
            }
        }

        b.raws
    }

    fn default_params() -> AnalysisParams {
        AnalysisParams {
            p_threshold: 0.05,
            ..AnalysisParams::default()
        }
    }

    #[test]
    fn invalid_parameters_fail_before_any_computation() {
        let params = AnalysisParams {
            p_threshold: 0.5,
            ..AnalysisParams::default()
        };
        let result = run(&square_boundary(10_000.0), identity, clustered_raws(), &params);
        assert!(matches!(result, Err(PipelineError::Configuration(_))));
    }

    #[test]
    fn empty_input_is_a_data_error() {
        let result = run(
            &square_boundary(10_000.0),
            identity,
            Vec::new(),
            &default_params(),
        );
        assert!(matches!(
            result,
            Err(PipelineError::Data(TaxonomyError::EmptyNormalized))
        ));
    }

    #[test]
    fn two_clusters_become_two_graded_centers() {
        let output = run(
            &square_boundary(10_000.0),
            identity,
            clustered_raws(),
            &default_params(),
        )
        .unwrap();

        assert_eq!(output.centers.len(), 2);

        let retail = output
            .centers
            .iter()
            .find(|c| c.poi_count == 180)
            .expect("the 3x3 block survives");
        // Both maxima (area and activity) sit in the retail block.
        assert_eq!(retail.tier, CenterTier::Primary);
        assert_eq!(
            retail.function,
            CenterFunction::Specialized(MidFunction::Retail)
        );
        assert!(retail.area > 2_000_000.0);

        let residential = output
            .centers
            .iter()
            .find(|c| c.poi_count == 80)
            .expect("the 2x2 block survives");
        assert_eq!(residential.tier, CenterTier::Cluster);
        assert_eq!(
            residential.function,
            CenterFunction::Specialized(MidFunction::Residential)
        );
        assert!(residential.top_quotient > 1.3);

        // Background cells never reach significance.
        let significant = output.cells.iter().filter(|c| c.significant).count();
        assert_eq!(significant, 13);
        for quotient in &output.quotients {
            assert!(quotient.center_id < 2);
            assert!(quotient.quotient.is_finite());
        }
    }

    #[test]
    fn noise_cutoff_prunes_a_marginal_hotspot() {
        let params = AnalysisParams {
            p_threshold: 0.05,
            noise_threshold: 0.2,
            ..AnalysisParams::default()
        };
        let output = run(
            &square_boundary(10_000.0),
            identity,
            three_block_raws(),
            &params,
        )
        .unwrap();

        // All three blocks register as hotspots (9 + 4 + 4 cells)...
        let significant = output.cells.iter().filter(|c| c.significant).count();
        assert_eq!(significant, 17);

        // ...but the marginal block holds 64 of 354 POIs, under the
        // activity cutoff of 0.2 * 354, and never becomes a center.
        assert_eq!(output.centers.len(), 2);
        let mut counts: Vec<usize> = output.centers.iter().map(|c| c.poi_count).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![80, 180]);
    }

    #[test]
    fn uniform_activity_yields_a_valid_empty_result() {
        let mut b = RawBuilder::new();
        for i in 0..3 {
            let x0 = 1600.0 + f64::from(i) * 500.0;
            b.add("Shopping Service;Shopping Plaza;", x0 + 100.0, 1700.0);
            b.add("Food & Beverages;Chinese Food Restaurant;", x0 + 200.0, 1700.0);
        }

        let output = run(
            &square_boundary(10_000.0),
            identity,
            b.raws,
            &default_params(),
        )
        .unwrap();

        assert!(output.centers.is_empty());
        assert!(output.quotients.is_empty());
        assert_eq!(output.cells.len(), 3);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let boundary = square_boundary(10_000.0);
        let params = default_params();
        let first = run(&boundary, identity, clustered_raws(), &params).unwrap();
        let second = run(&boundary, identity, clustered_raws(), &params).unwrap();
        assert_eq!(first, second);
    }
}
