#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analysis parameters, per-cell metrics, and center result types.

use center_map_poi_models::MidFunction;
use geo::Polygon;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Accepted range for the significance threshold.
pub const P_THRESHOLD_RANGE: (f64, f64) = (0.01, 0.05);
/// Accepted range for the mixed-use (location quotient) threshold.
pub const MIXED_USE_RANGE: (f64, f64) = (1.15, 1.5);
/// Accepted range for the cell size in meters.
pub const CELL_SIZE_RANGE: (f64, f64) = (50.0, 1000.0);
/// Absolute area above which a non-primary center is graded secondary, in
/// square meters.
pub const SECONDARY_AREA_THRESHOLD: f64 = 2_000_000.0;

/// A parameter fell outside its accepted range.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("parameter {name} = {value} out of range {min}-{max}")]
pub struct ConfigurationError {
    /// Offending parameter name.
    pub name: &'static str,
    /// Value supplied by the caller.
    pub value: f64,
    /// Lowest accepted value.
    pub min: f64,
    /// Highest accepted value.
    pub max: f64,
}

/// Cell adjacency used for the hotspot neighborhood graph.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Adjacency {
    /// Cells sharing an edge or a vertex are neighbors.
    Queen,
    /// Only cells sharing an edge are neighbors.
    Rook,
}

/// Tunable parameters for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParams {
    /// Fishnet cell size in meters (50-1000).
    pub cell_size: f64,
    /// Neighborhood relation for hotspot detection.
    pub adjacency: Adjacency,
    /// One-tailed significance threshold for center cells (0.01-0.05).
    pub p_threshold: f64,
    /// Fraction of the total POI count below which a candidate center is
    /// discarded as noise.
    pub noise_threshold: f64,
    /// Location-quotient bar a dominant function must clear; at or below it
    /// the center is labeled mixed-use (1.15-1.5).
    pub mixed_use_threshold: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            cell_size: 500.0,
            adjacency: Adjacency::Queen,
            p_threshold: 0.01,
            noise_threshold: 0.006,
            mixed_use_threshold: 1.3,
        }
    }
}

impl AnalysisParams {
    /// Validates every parameter range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_range("cell_size", self.cell_size, CELL_SIZE_RANGE)?;
        check_range("p_threshold", self.p_threshold, P_THRESHOLD_RANGE)?;
        check_range("mixed_use_threshold", self.mixed_use_threshold, MIXED_USE_RANGE)?;
        check_range("noise_threshold", self.noise_threshold, (0.0, 1.0))?;
        Ok(())
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), ConfigurationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError {
            name,
            value,
            min,
            max,
        })
    }
}

/// Per-cell index record for one non-empty grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetrics {
    /// Grid cell index.
    pub cell_index: usize,
    /// Lattice row of the cell.
    pub row: usize,
    /// Lattice column of the cell.
    pub col: usize,
    /// POIs joined to the cell.
    pub poi_count: usize,
    /// Activity density (POIs per hectare of the default cell area).
    pub density: f64,
    /// Min-max normalized density in [0, 1].
    pub density_score: f64,
    /// Distinct subtypes present in the cell.
    pub distinct_subtypes: usize,
    /// Entropy-based diversity before the per-cell rescaling.
    pub raw_diversity: f64,
    /// Comparable diversity score.
    pub diversity_score: f64,
    /// Composite centrality index (density score x diversity score).
    pub centrality: f64,
    /// Local Getis-Ord z-score, filled by the hotspot stage.
    pub z_score: f64,
    /// Halved normal significance value for the z-score.
    pub p_value: f64,
    /// Whether the cell qualifies as a center cell.
    pub significant: bool,
}

/// Size/importance grade of a center.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CenterTier {
    /// The single center scoring a composite of exactly 1.
    Primary,
    /// Non-primary center larger than the secondary area threshold.
    Secondary,
    /// Everything else.
    Cluster,
}

/// The dominant economic function assigned to a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CenterFunction {
    /// One function's location quotient clears the mixed-use bar.
    Specialized(MidFunction),
    /// No function clears the bar; the center serves many functions.
    MixedUse,
}

impl std::fmt::Display for CenterFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Specialized(mid) => write!(f, "{mid}"),
            Self::MixedUse => write!(f, "MIXED_USE"),
        }
    }
}

/// One surviving center polygon with its grades.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterRecord {
    /// Sequential center identifier.
    pub id: u32,
    /// Dissolved center geometry (union of whole cells).
    pub geometry: Polygon<f64>,
    /// Polygon area in square meters.
    pub area: f64,
    /// Total POI count of the cells composing the center.
    pub poi_count: usize,
    /// Size/importance tier.
    pub tier: CenterTier,
    /// Dominant function, or mixed-use.
    pub function: CenterFunction,
    /// The maximum location quotient backing the function decision.
    pub top_quotient: f64,
}

/// One (center, function) location-quotient evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuotientRecord {
    /// Center identifier.
    pub center_id: u32,
    /// Mid-level function evaluated.
    pub function: MidFunction,
    /// Local share divided by global share.
    pub quotient: f64,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    /// Surviving centers with grades and functions.
    pub centers: Vec<CenterRecord>,
    /// Full location-quotient table, one row per evaluated pair.
    pub quotients: Vec<LocationQuotientRecord>,
    /// Per-cell metrics for every non-empty cell.
    pub cells: Vec<CellMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(AnalysisParams::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        let mut params = AnalysisParams::default();
        params.p_threshold = 0.2;
        let err = params.validate().unwrap_err();
        assert_eq!(err.name, "p_threshold");

        let mut params = AnalysisParams::default();
        params.cell_size = 20.0;
        assert_eq!(params.validate().unwrap_err().name, "cell_size");

        let mut params = AnalysisParams::default();
        params.mixed_use_threshold = 2.0;
        assert_eq!(params.validate().unwrap_err().name, "mixed_use_threshold");

        let mut params = AnalysisParams::default();
        params.noise_threshold = f64::NAN;
        assert_eq!(params.validate().unwrap_err().name, "noise_threshold");
    }

    #[test]
    fn adjacency_parses_case_insensitively() {
        assert_eq!("Queen".parse::<Adjacency>().unwrap(), Adjacency::Queen);
        assert_eq!("rook".parse::<Adjacency>().unwrap(), Adjacency::Rook);
    }

    #[test]
    fn center_function_display() {
        use center_map_poi_models::MidFunction;

        assert_eq!(
            CenterFunction::Specialized(MidFunction::Retail).to_string(),
            "RETAIL"
        );
        assert_eq!(CenterFunction::MixedUse.to_string(), "MIXED_USE");
    }
}
