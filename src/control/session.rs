//! Interactive Life session.
//!
//! A [`Simulation`] bundles the grid, the stepping engine, a [`Ticker`] and
//! the running flag into one caller-owned value. There is no process-wide
//! state: a driver (the CLI, a browser page through the wasm bindings, a
//! test) holds the session and threads it through every call.

use std::time::{Duration, Instant};

use crate::control::Ticker;
use crate::engine::{Grid, GridError, LifeEngine};
use crate::schema::{ConfigError, GameConfig, Seed};

/// Errors surfaced while assembling or mutating a session.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Grid operation failed: {0}")]
    Grid(#[from] GridError),
}

/// Caller-owned Game of Life session.
///
/// Single-threaded by construction: each tick is one synchronous
/// read-compute-swap, so readers between ticks always observe a complete
/// generation. Stopping the session is the only cancellation; there is never
/// a partial tick to clean up.
pub struct Simulation {
    config: GameConfig,
    grid: Grid,
    engine: LifeEngine,
    ticker: Ticker,
    running: bool,
    generation: u64,
}

impl Simulation {
    /// Create a session with an all-dead grid.
    pub fn new(config: &GameConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns)?;
        Ok(Self::assemble(config.clone(), grid))
    }

    /// Create a session with an initial population generated from `seed`.
    pub fn with_seed(config: &GameConfig, seed: &Seed) -> Result<Self, SimulationError> {
        config.validate()?;
        let grid = seed.generate(config.rows, config.columns)?;
        Ok(Self::assemble(config.clone(), grid))
    }

    fn assemble(config: GameConfig, grid: Grid) -> Self {
        let ticker = Ticker::new(Duration::from_millis(config.tick_interval_ms));
        Self {
            config,
            grid,
            engine: LifeEngine::new(),
            ticker,
            running: false,
            generation: 0,
        }
    }

    /// Start advancing on ticker activations. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.ticker.rearm();
        log::debug!(
            "Simulation started at {} ms per generation",
            self.config.tick_interval_ms
        );
    }

    /// Stop advancing. No-op when already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        log::debug!("Simulation stopped at generation {}", self.generation);
    }

    /// Whether ticks currently advance the grid.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Kill every cell and reset the generation counter.
    ///
    /// Clearing resets the board, not the schedule: a running session keeps
    /// ticking over the emptied grid.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let alive = self.grid.toggle(row, col)?;
        log::debug!(
            "Cell at ({}, {}) is now {}",
            row,
            col,
            if alive { "alive" } else { "dead" }
        );
        Ok(alive)
    }

    /// Change the tick interval, effective immediately.
    ///
    /// When running, the schedule restarts: the next generation comes one
    /// full new interval after the next poll.
    pub fn set_speed(&mut self, interval: Duration) {
        self.config.tick_interval_ms = interval.as_millis() as u64;
        self.ticker.set_interval(interval);
    }

    /// Rebuild the grid all-dead at new dimensions and reset the generation
    /// counter. The running flag is untouched.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), GridError> {
        let fresh = Grid::new(rows, columns)?;
        self.grid.replace(fresh);
        self.config.rows = rows;
        self.config.columns = columns;
        self.generation = 0;
        Ok(())
    }

    /// Advance exactly one generation, ticker and running flag ignored.
    pub fn step(&mut self) {
        self.engine.step(&mut self.grid);
        self.generation += 1;
    }

    /// Advance one generation iff running and the ticker is due at `now`.
    ///
    /// Returns whether a generation was computed. This is the cooperative
    /// driver entry point: call it as often as convenient and the ticker
    /// decides which calls do work.
    pub fn pump_at(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if self.ticker.poll_at(now) {
            self.step();
            true
        } else {
            false
        }
    }

    /// [`pump_at`](Self::pump_at) against the wall clock.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pump(&mut self) -> bool {
        self.pump_at(Instant::now())
    }

    /// Time remaining until the next tick is due, for driver sleeps.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.ticker.time_until_due(now)
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since creation, reset or resize.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Session configuration, kept in sync with live speed and size changes.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
