//! Grid state for the Life board.
//!
//! A `Grid` owns the boolean alive/dead matrix and its dimensions. Cells are
//! stored as a flat row-major vector with indexing: [row * columns + col].

use std::mem;

/// Errors for grid construction and cell access.
///
/// Both variants are caller contract violations; the grid fails fast rather
/// than clamping out-of-range input.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("Cell ({row}, {col}) is out of bounds for a {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
}

/// Boolean cell matrix with fixed dimensions.
///
/// Dimensions are fixed for the lifetime of one grid instance; resizing means
/// constructing a new grid and swapping it in with [`Grid::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat cell storage, row-major: [row * columns + col].
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// Fails with [`GridError::InvalidDimensions`] when either dimension is
    /// zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
        })
    }

    /// Grid height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total cell count (rows * columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major view of the cells.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Convert (row, col) to a flat index. Callers have already bounds-checked.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.columns {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Read one cell.
    ///
    /// Out-of-range coordinates fail with [`GridError::OutOfBounds`]. The
    /// generation engine never takes this path; it pre-validates coordinates
    /// with wrap arithmetic and indexes the flat slice directly.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.idx(row, col)])
    }

    /// Write one cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell in place and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        let idx = self.idx(row, col);
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Swap in a whole new matrix, dimensions included.
    ///
    /// Used when advancing a generation or resizing. Readers observe either
    /// the old or the new grid in full, never a mix.
    pub fn replace(&mut self, other: Grid) {
        *self = other;
    }

    /// Reset every cell to dead, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over the coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    /// Exchange the cell buffer with `buf`, which must have matching length.
    ///
    /// Zero-allocation path for the stepper's double buffer.
    pub(crate) fn swap_cells(&mut self, buf: &mut Vec<bool>) {
        debug_assert_eq!(buf.len(), self.cells.len());
        mem::swap(&mut self.cells, buf);
    }

    /// Write one cell with both coordinates wrapped modulo the dimensions.
    ///
    /// Torus-native setter for pattern stamping; never out of bounds.
    pub(crate) fn set_wrapped(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.idx(row % self.rows, col % self.columns);
        self.cells[idx] = alive;
    }

    /// Assemble a grid from a prepared cell buffer.
    ///
    /// Internal; callers guarantee `cells.len() == rows * columns` and
    /// non-zero dimensions.
    pub(crate) fn from_parts(rows: usize, columns: usize, cells: Vec<bool>) -> Self {
        debug_assert!(rows >= 1 && columns >= 1);
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            cells,
            rows,
            columns,
        }
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn arb_grid_and_cell() -> impl Strategy<Value = (Grid, usize, usize)> {
        (1usize..=16, 1usize..=16)
            .prop_flat_map(|(rows, columns)| {
                (
                    proptest::collection::vec(any::<bool>(), rows * columns),
                    Just(rows),
                    Just(columns),
                    0..rows,
                    0..columns,
                )
            })
            .prop_map(|(cells, rows, columns, row, col)| {
                let mut grid = Grid::new(rows, columns).unwrap();
                for (i, alive) in cells.into_iter().enumerate() {
                    if alive {
                        grid.set(i / columns, i % columns, true).unwrap();
                    }
                }
                (grid, row, col)
            })
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_any_cell((mut grid, row, col) in arb_grid_and_cell()) {
            let before = grid.clone();

            let flipped = grid.toggle(row, col).unwrap();
            prop_assert_eq!(flipped, !before.get(row, col).unwrap());
            prop_assert_ne!(&grid, &before);

            grid.toggle(row, col).unwrap();
            prop_assert_eq!(grid, before);
        }
    }
}
