//! Schema module - configuration, layout arithmetic and seeding.

mod config;
mod seed;
mod viewport;

pub use config::*;
pub use seed::*;
pub use viewport::*;
