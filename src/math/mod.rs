//! Mathematical utilities: truncated averages for summary blocks.

pub mod stats;

pub use stats::*;
