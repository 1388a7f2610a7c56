//! Seed types for initial Life populations.

use serde::{Deserialize, Serialize};

use crate::engine::{Grid, GridError};

/// Complete seed specification for a session's first grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern stamped onto the empty grid.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glider { origin: (1, 1) },
        }
    }
}

/// Predefined initial patterns.
///
/// Stamp coordinates wrap modulo the grid dimensions, consistent with the
/// torus topology: a pattern placed near an edge continues on the opposite
/// side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    Empty,
    /// Explicit live cells as (row, col) pairs.
    Cells { cells: Vec<(usize, usize)> },
    /// 2x2 still-life block with its top-left cell at `origin`.
    Block { origin: (usize, usize) },
    /// Horizontal period-2 oscillator with its left cell at `origin`.
    Blinker { origin: (usize, usize) },
    /// Diagonally travelling glider with its bounding box at `origin`.
    Glider { origin: (usize, usize) },
    /// Random fill: each cell is alive with probability `density`.
    /// Deterministic for a given `seed` value.
    Soup { density: f32, seed: u64 },
}

const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

impl Seed {
    /// Generate the initial grid for the given dimensions.
    pub fn generate(&self, rows: usize, columns: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, columns)?;

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Cells { cells } => stamp(&mut grid, (0, 0), cells),
            Pattern::Block { origin } => stamp(&mut grid, *origin, BLOCK),
            Pattern::Blinker { origin } => stamp(&mut grid, *origin, BLINKER),
            Pattern::Glider { origin } => stamp(&mut grid, *origin, GLIDER),
            Pattern::Soup { density, seed } => fill_soup(&mut grid, *density, *seed),
        }

        Ok(grid)
    }
}

/// Set the given cells, offset by `origin`, wrapping around the torus.
fn stamp(grid: &mut Grid, origin: (usize, usize), cells: &[(usize, usize)]) {
    let base_row = origin.0 % grid.rows();
    let base_col = origin.1 % grid.columns();
    for &(dr, dc) in cells {
        grid.set_wrapped(base_row + dr, base_col + dc, true);
    }
}

/// Fill with an LCG-driven coin flip per cell so identical seeds reproduce
/// identical soups on every target.
fn fill_soup(grid: &mut Grid, density: f32, seed: u64) {
    let mut state = seed;
    let lcg_next = |s: &mut u64| -> f32 {
        *s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*s >> 33) as f32 / (1u64 << 31) as f32
    };

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            if lcg_next(&mut state) < density {
                grid.set_wrapped(row, col, true);
            }
        }
    }
}
