#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! POI normalization and the rule-table taxonomy classifier.
//!
//! Vendor POI exports carry a noisy hierarchical category string and a free
//! text name. [`normalize`](normalize::normalize) cleans a raw batch down to
//! in-boundary economic-activity records, and [`rules`] collapses each
//! record's categories and name keywords into the canonical
//! {domain, mid-function, subtype} taxonomy through an ordered decision
//! table where a later matching rule overwrites an earlier one's output.

pub mod normalize;
pub mod rules;

use thiserror::Error;

/// Errors that can occur during normalization and classification.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Every record was filtered out during normalization.
    #[error("no POIs remain after normalization (name/category filters, dedup, boundary)")]
    EmptyNormalized,

    /// No record received a subtype from the rule table.
    #[error("no POIs could be classified by the taxonomy rule table")]
    EmptyClassified,
}
