//! Torus Life - Conway's Game of Life on a toroidal grid.
//!
//! This crate implements the classic B3/S23 cellular automaton with
//! wrap-around neighbor counting: the grid is a torus, so edges connect to
//! opposite edges. A small session layer adds the interactive surface a
//! presentation layer needs (start/stop, cell toggling, live speed changes,
//! resizing).
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `engine`: Grid state and the toroidal generation rule
//! - `schema`: Configuration, layout arithmetic and seeding
//! - `control`: Tick scheduling and the interactive session
//!
//! # Example
//!
//! ```rust
//! use torus_life::{
//!     control::Simulation,
//!     schema::{GameConfig, Pattern, Seed},
//! };
//!
//! // Create configuration
//! let config = GameConfig {
//!     rows: 16,
//!     columns: 16,
//!     tick_interval_ms: 100,
//! };
//!
//! // Seed a glider and advance it one generation
//! let seed = Seed {
//!     pattern: Pattern::Glider { origin: (1, 1) },
//! };
//! let mut simulation = Simulation::with_seed(&config, &seed).unwrap();
//! simulation.step();
//!
//! println!("Population after 1 step: {}", simulation.grid().population());
//! ```

pub mod control;
pub mod engine;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use control::{Simulation, SimulationError, Ticker};
pub use engine::{Grid, GridError, GridStats, LifeEngine, next_generation};
pub use schema::{GameConfig, Pattern, Seed, Viewport};
