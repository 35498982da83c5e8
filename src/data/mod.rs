//! Data sources.
//!
//! - synthetic daily sales generation (`sample`)

pub mod sample;

pub use sample::*;
