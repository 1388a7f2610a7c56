//! Pixel-space layout arithmetic.
//!
//! Maps a presentation layer's pixel geometry onto grid coordinates. All of
//! this is pure so resize math and click dispatch stay testable without a UI.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Pixel geometry of the rendering surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Usable surface width in pixels.
    pub width_px: u32,
    /// Usable surface height in pixels.
    pub height_px: u32,
    /// Edge length of one square cell in pixels.
    pub cell_size_px: u32,
}

impl Viewport {
    /// Number of whole cells that fit the surface, as (rows, columns).
    ///
    /// Fails with [`ConfigError::InvalidCellSize`] when the cell size is
    /// zero. A surface smaller than one cell yields a zero dimension, which
    /// grid construction rejects downstream.
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        if self.cell_size_px == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        let rows = (self.height_px / self.cell_size_px) as usize;
        let columns = (self.width_px / self.cell_size_px) as usize;
        Ok((rows, columns))
    }

    /// Map a pixel position to the cell under it.
    ///
    /// Returns `None` when the point falls outside the cell area, including
    /// the partial-cell margin at the right and bottom edges.
    pub fn cell_at(&self, x_px: u32, y_px: u32) -> Option<(usize, usize)> {
        let (rows, columns) = self.grid_dimensions().ok()?;
        let row = (y_px / self.cell_size_px) as usize;
        let col = (x_px / self.cell_size_px) as usize;
        (row < rows && col < columns).then_some((row, col))
    }
}

/// Convert a flat cell index to (row, col). `columns` must be non-zero.
#[inline]
pub fn index_to_cell(index: usize, columns: usize) -> (usize, usize) {
    (index / columns, index % columns)
}

/// Convert (row, col) to a flat cell index.
#[inline]
pub fn cell_index(row: usize, col: usize, columns: usize) -> usize {
    row * columns + col
}
