//! Location-quotient function grading.
//!
//! For every surviving center, each policy mid-function present among its
//! POIs gets a location quotient (local share over study-area share). The
//! highest quotient names the center's dominant function unless it fails
//! to clear the mixed-use bar.

use std::collections::BTreeMap;

use center_map_analytics_models::{
    CenterFunction, CenterRecord, LocationQuotientRecord,
};
use center_map_poi_models::{MidFunction, Poi};

use crate::centers::GradedCandidate;

/// Grades every center's dominant function and emits the full LQ table.
///
/// Ties on the quotient resolve to the function listed first in
/// [`MidFunction::all`], keeping the decision deterministic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decide(
    graded: Vec<GradedCandidate>,
    joined: &BTreeMap<usize, Vec<Poi>>,
    mixed_use_threshold: f64,
) -> (Vec<CenterRecord>, Vec<LocationQuotientRecord>) {
    let mut global: BTreeMap<MidFunction, usize> = BTreeMap::new();
    let mut global_total = 0_usize;
    for poi in joined.values().flatten() {
        global_total += 1;
        if let Some(mid) = poi.class.mid {
            *global.entry(mid).or_default() += 1;
        }
    }

    let mut centers = Vec::with_capacity(graded.len());
    let mut quotients = Vec::new();
    let mut next_id = 0_u32;

    for entry in graded {
        let mut local: BTreeMap<MidFunction, usize> = BTreeMap::new();
        let mut local_total = 0_usize;
        for index in &entry.candidate.cell_indexes {
            for poi in joined.get(index).map(Vec::as_slice).unwrap_or_default() {
                local_total += 1;
                if let Some(mid) = poi.class.mid {
                    *local.entry(mid).or_default() += 1;
                }
            }
        }

        let mut best: Option<(MidFunction, f64)> = None;
        for &mid in MidFunction::all() {
            let Some(&local_count) = local.get(&mid) else {
                continue;
            };
            let global_count = global.get(&mid).copied().unwrap_or_default();
            if global_count == 0 || local_total == 0 {
                continue;
            }
            let local_share = local_count as f64 / local_total as f64;
            let global_share = global_count as f64 / global_total as f64;
            let quotient = local_share / global_share;

            quotients.push(LocationQuotientRecord {
                center_id: next_id,
                function: mid,
                quotient,
            });
            if best.is_none_or(|(_, top)| quotient > top) {
                best = Some((mid, quotient));
            }
        }

        let (function, top_quotient) = match best {
            Some((mid, top)) if top > mixed_use_threshold => {
                (CenterFunction::Specialized(mid), top)
            }
            Some((_, top)) => (CenterFunction::MixedUse, top),
            None => (CenterFunction::MixedUse, 0.0),
        };

        centers.push(CenterRecord {
            id: next_id,
            geometry: entry.candidate.geometry,
            area: entry.candidate.area,
            poi_count: entry.candidate.poi_count,
            tier: entry.tier,
            function,
            top_quotient,
        });
        next_id += 1;
    }

    log::info!(
        "Graded {} centers ({} location-quotient rows)",
        centers.len(),
        quotients.len(),
    );

    (centers, quotients)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use center_map_analytics_models::CenterTier;
    use center_map_poi_models::{CategoryLevels, Classification, Subtype};
    use geo::{Rect, coord};

    use super::*;
    use crate::centers::Candidate;

    fn poi(id: usize, subtype: Subtype) -> Poi {
        Poi {
            id: id.to_string(),
            name: format!("poi {id}"),
            address: String::new(),
            levels: CategoryLevels::default(),
            class: Classification {
                domain: Some(subtype.mid_function().domain()),
                mid: Some(subtype.mid_function()),
                subtype: Some(subtype),
            },
            x: 0.0,
            y: 0.0,
        }
    }

    fn pois(subtypes: &[(Subtype, usize)]) -> Vec<Poi> {
        let mut out = Vec::new();
        for &(subtype, count) in subtypes {
            for _ in 0..count {
                out.push(poi(out.len(), subtype));
            }
        }
        out
    }

    fn candidate_over(cell_indexes: Vec<usize>, poi_count: usize) -> GradedCandidate {
        let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 500.0, y: 500.0 });
        GradedCandidate {
            candidate: Candidate {
                geometry: rect.to_polygon(),
                cell_indexes,
                area: 250_000.0,
                poi_count,
            },
            composite: 0.5,
            tier: CenterTier::Cluster,
        }
    }

    #[test]
    fn overrepresented_function_wins() {
        let mut joined = BTreeMap::new();
        joined.insert(0, pois(&[(Subtype::Mall, 8), (Subtype::ChineseRestaurant, 2)]));
        joined.insert(5, pois(&[(Subtype::ResidentialQuarter, 10)]));

        let (centers, quotients) =
            decide(vec![candidate_over(vec![0], 10)], &joined, 1.3);

        assert_eq!(centers.len(), 1);
        // Retail: local 0.8 over global 0.4. Food: local 0.2 over global
        // 0.1. Both quotients are 2; the earlier-listed retail wins.
        assert_eq!(
            centers[0].function,
            CenterFunction::Specialized(MidFunction::Retail)
        );
        assert_relative_eq!(centers[0].top_quotient, 2.0);

        assert_eq!(quotients.len(), 2);
        assert!(quotients
            .iter()
            .all(|q| q.center_id == 0 && (q.quotient - 2.0).abs() < 1e-12));
    }

    #[test]
    fn balanced_center_is_mixed_use() {
        let mut joined = BTreeMap::new();
        joined.insert(0, pois(&[(Subtype::Mall, 4), (Subtype::ResidentialQuarter, 4)]));
        joined.insert(5, pois(&[(Subtype::Mall, 4), (Subtype::ResidentialQuarter, 4)]));

        let (centers, _) = decide(vec![candidate_over(vec![0], 8)], &joined, 1.3);

        assert_eq!(centers[0].function, CenterFunction::MixedUse);
        assert_relative_eq!(centers[0].top_quotient, 1.0);
    }

    #[test]
    fn quotient_rows_cover_only_present_functions() {
        let mut joined = BTreeMap::new();
        joined.insert(0, pois(&[(Subtype::Mall, 2)]));
        joined.insert(3, pois(&[(Subtype::Hospital, 6)]));

        let (_, quotients) = decide(vec![candidate_over(vec![0], 2)], &joined, 1.3);

        assert_eq!(quotients.len(), 1);
        assert_eq!(quotients[0].function, MidFunction::Retail);
    }

    #[test]
    fn center_without_graded_functions_falls_back_to_mixed_use() {
        let mut unclassified = pois(&[(Subtype::Mall, 3)]);
        for poi in &mut unclassified {
            poi.class.mid = None;
            poi.class.subtype = None;
        }
        let mut joined = BTreeMap::new();
        joined.insert(0, unclassified);

        let (centers, quotients) = decide(vec![candidate_over(vec![0], 3)], &joined, 1.3);

        // No quotient can be computed, so the center stays in the output
        // as mixed-use with a zero top quotient.
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].function, CenterFunction::MixedUse);
        assert_relative_eq!(centers[0].top_quotient, 0.0);
        assert!(quotients.is_empty());
    }

    #[test]
    fn center_ids_are_sequential() {
        let mut joined = BTreeMap::new();
        joined.insert(0, pois(&[(Subtype::Mall, 2), (Subtype::Hospital, 1)]));
        joined.insert(8, pois(&[(Subtype::Hospital, 3)]));

        let (centers, _) = decide(
            vec![candidate_over(vec![0], 3), candidate_over(vec![8], 3)],
            &joined,
            1.3,
        );
        assert_eq!(centers[0].id, 0);
        assert_eq!(centers[1].id, 1);
    }
}
