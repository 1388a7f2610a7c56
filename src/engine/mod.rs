//! Engine module - grid state and the toroidal generation rule.

mod grid;
mod rules;
mod stats;
mod stepper;

pub use grid::*;
pub use rules::*;
pub use stats::*;
pub use stepper::*;
