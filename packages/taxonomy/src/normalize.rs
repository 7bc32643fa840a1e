//! Raw POI batch normalization.
//!
//! Turns vendor CSV records into classified, in-boundary [`Poi`] values:
//! splits the category string, drops excluded level-1 categories and
//! nameless records, deduplicates on (name, address) keeping the first
//! occurrence, projects coordinates through the caller-supplied projection,
//! and keeps only points inside the study boundary. Classification happens
//! afterwards via the rule table; records the table cannot confidently
//! classify are dropped and counted, never an error.

use std::collections::HashSet;

use center_map_poi_models::{CategoryLevels, Classification, Poi, RawPoi};

use crate::{TaxonomyError, rules};

/// Level-1 vendor categories describing locations or infrastructure rather
/// than economic activity. Keeping them would distort density measurement.
pub const EXCLUDED_LEVEL1: &[&str] = &[
    "Event & Activity",
    "Transportation Service",
    "Public Facility",
    "Address Information",
    "Indoor Facility",
    "Motorcycle Service",
    "Auto Service",
    "Auto Repair",
    "Auto Dealers",
    "Pass Facilities",
    "Road Furniture",
    "Place Name & Address",
];

/// Drop counters accumulated during normalization and classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records with an empty name.
    pub missing_name: usize,
    /// Records whose level-1 category is on the exclusion list.
    pub excluded_category: usize,
    /// Later occurrences of an already-seen (name, address) pair.
    pub duplicates: usize,
    /// Records whose projected point fell outside the boundary.
    pub outside_boundary: usize,
    /// Records the rule table left without a subtype.
    pub unclassified: usize,
}

/// Normalizes a merged batch of raw POI records.
///
/// `project` maps WGS84 (longitude, latitude) to planar (x, y);
/// `within_boundary` is the strict spatial membership test against the
/// non-expanded study boundary.
///
/// # Errors
///
/// Returns [`TaxonomyError::EmptyNormalized`] when nothing survives the
/// filters.
pub fn normalize<P, B>(
    raws: Vec<RawPoi>,
    mut project: P,
    mut within_boundary: B,
) -> Result<(Vec<Poi>, NormalizeStats), TaxonomyError>
where
    P: FnMut(f64, f64) -> (f64, f64),
    B: FnMut(f64, f64) -> bool,
{
    let total = raws.len();
    let mut stats = NormalizeStats::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut pois = Vec::new();

    for raw in raws {
        if raw.name.trim().is_empty() {
            stats.missing_name += 1;
            continue;
        }

        let levels = CategoryLevels::parse(&raw.category);
        if EXCLUDED_LEVEL1
            .iter()
            .any(|excluded| levels.level1.contains(excluded))
        {
            stats.excluded_category += 1;
            continue;
        }

        if !seen.insert((raw.name.clone(), raw.address.clone())) {
            stats.duplicates += 1;
            continue;
        }

        let (x, y) = project(raw.longitude, raw.latitude);
        if !within_boundary(x, y) {
            stats.outside_boundary += 1;
            continue;
        }

        pois.push(Poi {
            id: raw.id,
            name: raw.name,
            address: raw.address,
            levels,
            class: Classification::default(),
            x,
            y,
        });
    }

    log::info!(
        "Normalized {total} raw POIs down to {}: {} nameless, {} excluded categories, {} duplicates, {} outside boundary",
        pois.len(),
        stats.missing_name,
        stats.excluded_category,
        stats.duplicates,
        stats.outside_boundary,
    );

    if pois.is_empty() {
        return Err(TaxonomyError::EmptyNormalized);
    }

    Ok((pois, stats))
}

/// Runs the taxonomy rule table over normalized POIs, dropping records that
/// end up without a subtype.
///
/// # Errors
///
/// Returns [`TaxonomyError::EmptyClassified`] when no record receives a
/// subtype.
pub fn classify_batch(
    pois: Vec<Poi>,
    stats: &mut NormalizeStats,
) -> Result<Vec<Poi>, TaxonomyError> {
    let total = pois.len();
    let mut classified = Vec::with_capacity(total);

    for mut poi in pois {
        poi.class = rules::classify(&poi.levels, &poi.name);
        if poi.class.subtype.is_some() {
            classified.push(poi);
        } else {
            stats.unclassified += 1;
        }
    }

    log::info!(
        "Classified {} of {total} POIs ({} unclassifiable dropped)",
        classified.len(),
        stats.unclassified,
    );

    if classified.is_empty() {
        return Err(TaxonomyError::EmptyClassified);
    }

    Ok(classified)
}
