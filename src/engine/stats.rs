//! Grid statistics for monitoring.

use serde::{Deserialize, Serialize};

use crate::engine::Grid;

/// Point-in-time statistics for one grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStats {
    /// Number of live cells.
    pub population: usize,
    /// Live cells as a fraction of the whole grid.
    pub density: f32,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let population = grid.population();
        Self {
            population,
            density: population as f32 / grid.len() as f32,
        }
    }
}
