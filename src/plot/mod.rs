//! Chart descriptions and PNG rendering.

pub mod chart;

pub use chart::*;
