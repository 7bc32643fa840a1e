#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analysis stages over the gridded POI data.
//!
//! The stages run in order: per-cell index calculation, hotspot detection
//! over the centrality index, center dissolution and tiering, then the
//! location-quotient function grading. Each stage is a free function so the
//! pipeline crate can thread logging and error context between them.

pub mod centers;
pub mod function;
pub mod hotspot;
pub mod index;

pub use centers::{Candidate, GradedCandidate};

use thiserror::Error;

/// Numeric degeneracies the index math cannot recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    /// No grid cell contains any classified POI.
    #[error("no grid cell contains any classified POI")]
    NoOccupiedCells,

    /// Only one distinct subtype exists across the whole study area, so the
    /// entropy denominator is zero.
    #[error("only one distinct subtype exists across the study area")]
    SingleGlobalSubtype,

    /// Every occupied cell holds a single subtype, so no positive raw
    /// diversity exists to derive the single-subtype convention from.
    #[error("every occupied cell holds a single subtype")]
    NoDiversityReference,

    /// Surviving centers report a zero maximum area or POI count, so the
    /// composite tier score is undefined.
    #[error("surviving centers have a zero maximum area or POI count")]
    DegenerateCenterExtent,
}
