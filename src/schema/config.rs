//! Configuration types for Life sessions.

use serde::{Deserialize, Serialize};

use super::Viewport;

/// Default tick interval for configs that omit it.
fn default_tick_interval() -> u64 {
    100
}

/// Top-level session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub columns: usize,
    /// Milliseconds between generation ticks. 0 means unpaced: the session
    /// advances on every poll.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            columns: 32,
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// Total cell count (rows * columns).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Derive a configuration from pixel geometry.
    ///
    /// Rows and columns come from floor-dividing the viewport by the cell
    /// size, the way a presentation layer sizes the grid to fill its
    /// container.
    pub fn from_viewport(viewport: &Viewport, tick_interval_ms: u64) -> Result<Self, ConfigError> {
        let (rows, columns) = viewport.grid_dimensions()?;
        Ok(Self {
            rows,
            columns,
            tick_interval_ms,
        })
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, columns) must be non-zero")]
    InvalidDimensions,
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
}
