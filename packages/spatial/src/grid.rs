//! Fishnet grid construction.
//!
//! Tiles the boundary's bounding box, expanded by a fixed margin, into a
//! lattice of axis-aligned square cells. Edges are laid down from the high
//! edge downward, so the last row/column at the low edge may be undersized
//! (clamped to the expanded box, never spilling past it).

use geo::{Polygon, Rect, coord};

use crate::{Boundary, SpatialError};

/// Smallest accepted cell size in meters.
pub const MIN_CELL_SIZE: f64 = 50.0;
/// Largest accepted cell size in meters.
pub const MAX_CELL_SIZE: f64 = 1000.0;
/// Default cell size in meters.
pub const DEFAULT_CELL_SIZE: f64 = 500.0;
/// Margin added around the boundary's bounding box, in meters, so that
/// cells never clip activity sitting right on the boundary envelope.
pub const BBOX_MARGIN: f64 = 100.0;

/// One square (or edge-clamped) grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Sequential index, unique within one fishnet.
    pub index: usize,
    /// Row position in the lattice, counted from the top (high northing).
    pub row: usize,
    /// Column position in the lattice, counted from the left (low easting).
    pub col: usize,
    /// Cell extent in planar meters.
    pub rect: Rect<f64>,
}

impl Cell {
    /// The cell geometry as a polygon.
    #[must_use]
    pub fn polygon(&self) -> Polygon<f64> {
        self.rect.to_polygon()
    }

    /// Cell area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.rect.width() * self.rect.height()
    }
}

/// The full cell lattice over the expanded bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Fishnet {
    /// All cells, ordered row-major from the top-left corner.
    pub cells: Vec<Cell>,
    /// Number of lattice rows.
    pub rows: usize,
    /// Number of lattice columns.
    pub cols: usize,
    /// Requested cell size in meters.
    pub cell_size: f64,
}

impl Fishnet {
    /// Builds the fishnet for a projected boundary.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::CellSizeOutOfRange`] when the cell size is
    /// outside [`MIN_CELL_SIZE`]..=[`MAX_CELL_SIZE`].
    pub fn build(boundary: &Boundary, cell_size: f64) -> Result<Self, SpatialError> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) || !cell_size.is_finite() {
            return Err(SpatialError::CellSizeOutOfRange(cell_size));
        }

        let bbox = boundary.bounding_rect();
        let x_min = bbox.min().x - BBOX_MARGIN;
        let x_max = bbox.max().x + BBOX_MARGIN;
        let y_min = bbox.min().y - BBOX_MARGIN;
        let y_max = bbox.max().y + BBOX_MARGIN;

        // Descending from the high edge; the final edge clamps to the low
        // edge, which is where an undersized row/column can appear.
        let mut x_edges = descending_edges(x_max, x_min, cell_size);
        let y_edges = descending_edges(y_max, y_min, cell_size);
        x_edges.reverse();

        let cols = x_edges.len() - 1;
        let rows = y_edges.len() - 1;

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let top = y_edges[row];
            let bottom = y_edges[row + 1];
            for col in 0..cols {
                let left = x_edges[col];
                let right = x_edges[col + 1];
                cells.push(Cell {
                    index: cells.len(),
                    row,
                    col,
                    rect: Rect::new(
                        coord! { x: left, y: bottom },
                        coord! { x: right, y: top },
                    ),
                });
            }
        }

        log::info!(
            "Built {rows}x{cols} fishnet ({} cells) at {cell_size} m over a {:.0}x{:.0} m box",
            cells.len(),
            x_max - x_min,
            y_max - y_min,
        );

        Ok(Self {
            cells,
            rows,
            cols,
            cell_size,
        })
    }
}

/// Edge positions from `high` down to `low` in steps of `step`, with the
/// last edge clamped to `low`.
fn descending_edges(high: f64, low: f64, step: f64) -> Vec<f64> {
    let mut edges = vec![high];
    let mut value = high;
    while value > low {
        value -= step;
        edges.push(value.max(low));
    }
    edges
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::{MultiPolygon, polygon};

    use super::*;

    fn square_boundary(size: f64) -> Boundary {
        let polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: size, y: 0.0),
            (x: size, y: size),
            (x: 0.0, y: size),
        ];
        Boundary::from_projected(MultiPolygon::new(vec![polygon])).unwrap()
    }

    #[test]
    fn rejects_out_of_range_cell_size() {
        let boundary = square_boundary(1000.0);
        assert!(matches!(
            Fishnet::build(&boundary, 10.0),
            Err(SpatialError::CellSizeOutOfRange(_))
        ));
        assert!(matches!(
            Fishnet::build(&boundary, 5000.0),
            Err(SpatialError::CellSizeOutOfRange(_))
        ));
    }

    #[test]
    fn covers_expanded_bbox_without_gaps_or_overlap() {
        // 1000 m boundary + 2*100 m margin = 1200 m box: 3 columns of 500 m
        // with the last clamped to 200 m.
        let boundary = square_boundary(1000.0);
        let net = Fishnet::build(&boundary, 500.0).unwrap();

        assert_eq!(net.rows, 3);
        assert_eq!(net.cols, 3);
        assert_eq!(net.cells.len(), 9);

        let total_area: f64 = net.cells.iter().map(Cell::area).sum();
        assert_relative_eq!(total_area, 1200.0 * 1200.0, epsilon = 1e-6);

        let min_x = net
            .cells
            .iter()
            .map(|c| c.rect.min().x)
            .fold(f64::INFINITY, f64::min);
        let max_x = net
            .cells
            .iter()
            .map(|c| c.rect.max().x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min_x, -100.0, epsilon = 1e-6);
        assert_relative_eq!(max_x, 1100.0, epsilon = 1e-6);
    }

    #[test]
    fn undersized_cells_sit_on_the_low_edges() {
        let boundary = square_boundary(1000.0);
        let net = Fishnet::build(&boundary, 500.0).unwrap();

        for cell in &net.cells {
            let expected_width = if cell.col == 0 { 200.0 } else { 500.0 };
            let expected_height = if cell.row == net.rows - 1 { 200.0 } else { 500.0 };
            assert_relative_eq!(cell.rect.width(), expected_width, epsilon = 1e-6);
            assert_relative_eq!(cell.rect.height(), expected_height, epsilon = 1e-6);
        }
    }

    #[test]
    fn exact_fit_produces_full_cells_only() {
        // 800 m boundary + margins = 1000 m, an exact multiple of 500 m.
        let boundary = square_boundary(800.0);
        let net = Fishnet::build(&boundary, 500.0).unwrap();

        assert_eq!(net.cells.len(), 4);
        for cell in &net.cells {
            assert_relative_eq!(cell.area(), 250_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn indexes_are_sequential_row_major() {
        let boundary = square_boundary(1000.0);
        let net = Fishnet::build(&boundary, 500.0).unwrap();

        for (expected, cell) in net.cells.iter().enumerate() {
            assert_eq!(cell.index, expected);
            assert_eq!(cell.index, cell.row * net.cols + cell.col);
        }
    }
}
