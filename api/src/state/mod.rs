mod stats;
mod ticket;

pub use stats::*;
pub use ticket::*;
