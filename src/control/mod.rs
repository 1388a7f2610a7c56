//! Control module - tick scheduling and the interactive session.

mod session;
mod ticker;

pub use session::*;
pub use ticker::*;
