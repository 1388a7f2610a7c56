//! Stepper that advances a grid generation by generation.

use crate::engine::{Grid, next_generation_into};

/// Buffer-reusing driver for generation advances.
///
/// [`next_generation`](crate::engine::next_generation) allocates a fresh grid
/// on every call; the engine instead keeps a scratch buffer and swaps it into
/// the grid, so a steady tick loop allocates only when the grid is resized.
pub struct LifeEngine {
    /// Pre-allocated buffer for the next generation (reused each step).
    scratch: Vec<bool>,
}

impl LifeEngine {
    /// Create an engine with an empty scratch buffer.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Advance `grid` by one generation in place.
    ///
    /// One synchronous read-compute-swap cycle; the grid is never observable
    /// in a half-updated state.
    pub fn step(&mut self, grid: &mut Grid) {
        self.scratch.resize(grid.len(), false);
        next_generation_into(grid, &mut self.scratch);
        grid.swap_cells(&mut self.scratch);
    }

    /// Advance `grid` by the given number of generations.
    pub fn run(&mut self, grid: &mut Grid, generations: u64) {
        for _ in 0..generations {
            self.step(grid);
        }
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::next_generation;

    #[test]
    fn test_step_matches_pure_function() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(1, 2, true).unwrap();
        grid.set(2, 2, true).unwrap();
        grid.set(3, 2, true).unwrap();
        grid.set(4, 4, true).unwrap();

        let expected = next_generation(&grid);

        let mut engine = LifeEngine::new();
        engine.step(&mut grid);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_run_blinker_full_period() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(1, 2, true).unwrap();
        grid.set(2, 2, true).unwrap();
        grid.set(3, 2, true).unwrap();
        let start = grid.clone();

        let mut engine = LifeEngine::new();
        engine.run(&mut grid, 2);
        assert_eq!(grid, start);

        engine.run(&mut grid, 1);
        assert_ne!(grid, start);
    }

    #[test]
    fn test_scratch_follows_grid_replacement() {
        let mut engine = LifeEngine::new();

        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(3, 3, true).unwrap();
        engine.step(&mut grid);

        // Swap in a smaller grid; the scratch buffer must adapt.
        let mut small = Grid::new(3, 3).unwrap();
        small.set(1, 1, true).unwrap();
        grid.replace(small);

        let expected = next_generation(&grid);
        engine.step(&mut grid);
        assert_eq!(grid, expected);
    }
}
