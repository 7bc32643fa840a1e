//! Point-in-cell spatial join.
//!
//! An R-tree over the cell envelopes resolves each POI point to the grid
//! cell containing it. Cells are disjoint half-open rectangles: a point is
//! inside when `min <= v < max` on both axes, so a point sitting exactly on
//! a shared grid line lands in the cell whose low edge it touches. Which
//! cell wins at a grid line is a convention of this predicate, accepted as
//! approximation by the pipeline. Points beyond every cell (possible on the
//! expanded box's far edges) are dropped from downstream indexing.

use std::collections::BTreeMap;

use center_map_poi_models::Poi;
use rstar::{AABB, RTree, RTreeObject};

use crate::Fishnet;

/// One cell envelope stored in the R-tree.
struct CellEntry {
    index: usize,
    min: [f64; 2],
    max: [f64; 2],
}

impl CellEntry {
    const fn covers(&self, x: f64, y: f64) -> bool {
        x >= self.min[0] && x < self.max[0] && y >= self.min[1] && y < self.max[1]
    }
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

/// Pre-built R-tree index over fishnet cells.
pub struct GridIndex {
    tree: RTree<CellEntry>,
}

impl GridIndex {
    /// Builds the index from a fishnet.
    #[must_use]
    pub fn build(fishnet: &Fishnet) -> Self {
        let entries = fishnet
            .cells
            .iter()
            .map(|cell| CellEntry {
                index: cell.index,
                min: [cell.rect.min().x, cell.rect.min().y],
                max: [cell.rect.max().x, cell.rect.max().y],
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Looks up the cell containing a projected point.
    ///
    /// Cells are disjoint, so the first hit is the only hit.
    #[must_use]
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        let query = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&query)
            .find(|entry| entry.covers(x, y))
            .map(|entry| entry.index)
    }

    /// Assigns every POI to its containing cell.
    ///
    /// Returns POIs grouped per cell index, preserving input order within a
    /// cell. POIs outside every cell are dropped and counted in the log.
    #[must_use]
    pub fn join(&self, pois: Vec<Poi>) -> BTreeMap<usize, Vec<Poi>> {
        let total = pois.len();
        let mut cells: BTreeMap<usize, Vec<Poi>> = BTreeMap::new();
        let mut dropped = 0_usize;

        for poi in pois {
            match self.locate(poi.x, poi.y) {
                Some(index) => cells.entry(index).or_default().push(poi),
                None => dropped += 1,
            }
        }

        log::info!(
            "Joined {} of {total} POIs into {} non-empty cells ({dropped} outside the grid)",
            total - dropped,
            cells.len(),
        );

        cells
    }
}
