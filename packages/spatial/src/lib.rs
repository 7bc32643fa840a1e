#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Planar geometry for the urban center pipeline.
//!
//! Projects the WGS84 study boundary and POI coordinates into a metric
//! Gauss-Kruger plane, tiles the boundary's expanded bounding box into a
//! fishnet of square cells, and joins POI points to cells through an
//! R-tree index.

pub mod boundary;
pub mod grid;
pub mod join;
pub mod project;

pub use boundary::Boundary;
pub use grid::{Cell, Fishnet};
pub use join::GridIndex;
pub use project::Projection;

use thiserror::Error;

/// Errors that can occur while building the planar scaffolding.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Requested cell size falls outside the accepted range.
    #[error("cell size {0} m out of range {min}-{max} m", min = grid::MIN_CELL_SIZE, max = grid::MAX_CELL_SIZE)]
    CellSizeOutOfRange(f64),

    /// The boundary geometry is empty or carries no polygon.
    #[error("boundary geometry is empty or invalid")]
    InvalidBoundary,

    /// The boundary GeoJSON could not be parsed.
    #[error("boundary GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),
}
