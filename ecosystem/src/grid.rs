// grid.rs - Fixed-size grid stored as one row-major buffer

use crate::business::{Business, KindSource};
use crate::error::{EcosystemError, Result};

/// `None` is an empty cell.
pub type Cell = Option<Business>;

// Offsets of the 8 cells around (row, col)
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-empty `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EcosystemError::invalid(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            EcosystemError::invalid(format!("grid of {rows}x{cols} cells is too large"))
        })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|e| EcosystemError::invalid(format!("cannot allocate {rows}x{cols} grid: {e}")))?;
        cells.resize(len, None);
        Ok(Self { rows, cols, cells })
    }

    /// An all-empty grid with the same dimensions.
    pub fn emptied(&self) -> Grid {
        Grid { rows: self.rows, cols: self.cols, cells: vec![None; self.cells.len()] }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Linear index of (row, col), rejecting anything off the grid.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(EcosystemError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[self.index_of(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Occupied cells among the 8 around (row, col). Off-grid positions
    /// count as empty; there is no wraparound.
    pub fn occupied_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if nr < self.rows && nc < self.cols && self.cells[nr * self.cols + nc].is_some() {
                count += 1;
            }
        }
        count
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// `true` when no cell holds a business.
    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One slice per row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Builds the following generation from this one. `self` is never
    /// written to, so every cell sees the old values of its neighbors.
    pub fn next_generation(&self, source: &mut dyn KindSource) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let current = self.cells[row * self.cols + col];
                let next = match (current, self.occupied_neighbors(row, col)) {
                    (_, n) if n < 2 || n > 3 => None,     // Under- or overcrowded
                    (None, 3)                => Some(source.pick()),  // New business
                    (cell, _)                => cell,     // Survives or stays empty
                };
                cells.push(next);
            }
        }
        Grid { rows: self.rows, cols: self.cols, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::ScriptedSource;

    fn occupied(rows: usize, cols: usize, at: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in at {
            grid.set(r, c, Some(Business::Office)).unwrap();
        }
        grid
    }

    #[test]
    fn test_new_grid_is_vacant() {
        let grid = Grid::new(20, 20).unwrap();
        assert_eq!(grid.len(), 400);
        assert!(grid.is_vacant());
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(Grid::new(0, 5), Err(EcosystemError::InvalidParameter(_))));
        assert!(matches!(Grid::new(5, 0), Err(EcosystemError::InvalidParameter(_))));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        // rows * cols overflows usize
        assert!(matches!(Grid::new(usize::MAX, 2), Err(EcosystemError::InvalidParameter(_))));
        assert!(matches!(Grid::new(1 << 40, 1 << 40), Err(EcosystemError::InvalidParameter(_))));
        // Fits in usize but not in an allocation
        assert!(matches!(Grid::new(usize::MAX, 1), Err(EcosystemError::InvalidParameter(_))));
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.index_of(0, 0).unwrap(), 0);
        assert_eq!(grid.index_of(0, 3).unwrap(), 3);
        assert_eq!(grid.index_of(1, 0).unwrap(), 4);
        assert_eq!(grid.index_of(2, 3).unwrap(), 11);
        assert_eq!(
            grid.index_of(3, 0),
            Err(EcosystemError::IndexOutOfBounds { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert!(grid.index_of(0, 4).is_err());
    }

    #[test]
    fn test_neighbors_at_corner_do_not_wrap() {
        // Opposite corners would be neighbors on a torus
        let grid = occupied(3, 3, &[(2, 2), (0, 1), (1, 0)]);
        assert_eq!(grid.occupied_neighbors(0, 0), 2);
        assert_eq!(grid.occupied_neighbors(2, 0), 1);
    }

    #[test]
    fn test_neighbors_exclude_center() {
        let grid = occupied(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(grid.occupied_neighbors(1, 1), 8);
        assert_eq!(grid.occupied_neighbors(0, 0), 3);
    }

    #[test]
    fn test_block_is_stable_and_keeps_kinds() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(1, 1, Some(Business::Bank)).unwrap();
        grid.set(1, 2, Some(Business::Shop)).unwrap();
        grid.set(2, 1, Some(Business::Factory)).unwrap();
        grid.set(2, 2, Some(Business::Office)).unwrap();

        let next = grid.next_generation(&mut ScriptedSource::constant(Business::Office));
        assert_eq!(next, grid);
    }

    #[test]
    fn test_birth_uses_source_kind() {
        let grid = occupied(3, 3, &[(0, 0), (0, 2), (2, 1)]);
        let next = grid.next_generation(&mut ScriptedSource::constant(Business::Bank));
        assert_eq!(next.get(1, 1).unwrap(), Some(Business::Bank));
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let grid = occupied(3, 3, &[(1, 1), (0, 0), (0, 1), (0, 2), (1, 0)]);
        let next = grid.next_generation(&mut ScriptedSource::constant(Business::Shop));
        assert_eq!(next.get(1, 1).unwrap(), None);
    }

    #[test]
    fn test_iter_rows() {
        let grid = occupied(2, 3, &[(1, 2)]);
        let rows: Vec<&[Cell]> = grid.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[None, None, Some(Business::Office)]);
    }
}
