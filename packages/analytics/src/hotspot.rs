//! Hotspot detection over the centrality index.
//!
//! Binary-weights local Getis-Ord G (self excluded) over the occupied
//! cells, with queen or rook contiguity on the cell lattice. Cells whose
//! statistic is both positive and significant mark the raw center area.

use std::f64::consts::SQRT_2;

use center_map_analytics_models::{Adjacency, CellMetrics};

/// Standard normal CDF.
fn phi(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Lattice contiguity between two occupied cells.
fn is_neighbor(a: &CellMetrics, b: &CellMetrics, adjacency: Adjacency) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    match adjacency {
        Adjacency::Queen => dr <= 1 && dc <= 1 && (dr, dc) != (0, 0),
        Adjacency::Rook => dr + dc == 1,
    }
}

/// Fills the z-score, p-value, and significance flag of every cell.
///
/// A cell is significant when its statistic is positive and its halved
/// one-sided normal p-value falls below `p_threshold`. Cells whose moments
/// degenerate (no neighbors, too few cells, zero surrounding mean) yield a
/// non-finite statistic and are never significant.
///
/// Returns the number of significant cells.
#[allow(clippy::cast_precision_loss)]
pub fn detect(cells: &mut [CellMetrics], adjacency: Adjacency, p_threshold: f64) -> usize {
    let n = cells.len() as f64;
    let total: f64 = cells.iter().map(|c| c.centrality).sum();
    let total_sq: f64 = cells.iter().map(|c| c.centrality * c.centrality).sum();

    // Contiguity excludes the cell itself, so comparing every pair is
    // enough; occupied cells never share a lattice position.
    let neighborhoods: Vec<(f64, f64)> = cells
        .iter()
        .map(|cell| {
            let mut degree = 0.0_f64;
            let mut sum = 0.0_f64;
            for other in &*cells {
                if is_neighbor(cell, other, adjacency) {
                    degree += 1.0;
                    sum += other.centrality;
                }
            }
            (degree, sum)
        })
        .collect();

    let mut significant = 0_usize;
    for (cell, (k, neighbor_sum)) in cells.iter_mut().zip(neighborhoods) {
        let y = cell.centrality;
        let n1 = n - 1.0;
        let rest = total - y;
        let g = neighbor_sum / rest;
        let expected = k / n1;
        let mean = rest / n1;
        let variance = (total_sq - y * y).mul_add(1.0 / n1, -(mean * mean));
        let var_g = k * (n1 - k) * variance / (n1 * n1 * (n1 - 1.0) * mean * mean);
        let z = (g - expected) / var_g.sqrt();
        let p = (1.0 - phi(z.abs())) / 2.0;

        cell.z_score = z;
        cell.p_value = p;
        cell.significant = z.is_finite() && p.is_finite() && z > 0.0 && p < p_threshold;
        if cell.significant {
            significant += 1;
        }
    }

    log::info!(
        "Hotspot scan over {} cells ({adjacency} contiguity): {significant} significant at p < {p_threshold}",
        cells.len(),
    );

    significant
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn metric(row: usize, col: usize, centrality: f64) -> CellMetrics {
        CellMetrics {
            cell_index: row * 100 + col,
            row,
            col,
            poi_count: 1,
            density: 0.0,
            density_score: 0.0,
            distinct_subtypes: 1,
            raw_diversity: 0.0,
            diversity_score: 0.0,
            centrality,
            z_score: 0.0,
            p_value: 1.0,
            significant: false,
        }
    }

    #[test]
    fn queen_counts_diagonals_rook_does_not() {
        let a = metric(0, 0, 0.0);
        let diagonal = metric(1, 1, 0.0);
        let side = metric(0, 1, 0.0);

        assert!(is_neighbor(&a, &diagonal, Adjacency::Queen));
        assert!(!is_neighbor(&a, &diagonal, Adjacency::Rook));
        assert!(is_neighbor(&a, &side, Adjacency::Queen));
        assert!(is_neighbor(&a, &side, Adjacency::Rook));
        assert!(!is_neighbor(&a, &a, Adjacency::Queen));
        assert!(!is_neighbor(&a, &metric(0, 2, 0.0), Adjacency::Rook));
    }

    #[test]
    fn cluster_cells_score_higher_than_isolated_ones() {
        // A 2x2 high-value block in the corner of a 4x4 lattice.
        let mut cells = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let value = if row < 2 && col < 2 { 10.0 } else { 0.1 };
                cells.push(metric(row, col, value));
            }
        }

        detect(&mut cells, Adjacency::Queen, 0.05);

        let in_cluster = cells.iter().find(|c| (c.row, c.col) == (0, 0)).unwrap();
        let far_away = cells.iter().find(|c| (c.row, c.col) == (3, 3)).unwrap();
        assert!(in_cluster.z_score > 0.0);
        assert!(far_away.z_score < 0.0);
        assert!(in_cluster.z_score > far_away.z_score);
        assert!(!far_away.significant);
    }

    #[test]
    fn significance_requires_a_positive_statistic() {
        let mut cells = vec![
            metric(0, 0, 5.0),
            metric(0, 1, 5.0),
            metric(2, 5, 0.1),
            metric(4, 1, 0.1),
            metric(6, 3, 0.1),
        ];
        detect(&mut cells, Adjacency::Queen, 0.05);

        for cell in &cells {
            if cell.significant {
                assert!(cell.z_score > 0.0);
                assert!(cell.p_value < 0.05);
            }
        }
    }

    #[test]
    fn symmetric_cells_get_equal_statistics() {
        let mut cells = vec![
            metric(0, 0, 1.0),
            metric(0, 1, 3.0),
            metric(0, 2, 1.0),
        ];
        detect(&mut cells, Adjacency::Rook, 0.05);
        assert_relative_eq!(cells[0].z_score, cells[2].z_score, epsilon = 1e-12);
        assert_relative_eq!(cells[0].p_value, cells[2].p_value, epsilon = 1e-12);
    }

    #[test]
    fn single_cell_degenerates_without_panicking() {
        let mut cells = vec![metric(0, 0, 1.0)];
        let found = detect(&mut cells, Adjacency::Queen, 0.05);
        assert_eq!(found, 0);
        assert!(!cells[0].significant);
    }
}
