//! Command implementations

pub mod scores;
pub mod simple;

pub use scores::show_scores;
pub use simple::{Console, run_simple};
