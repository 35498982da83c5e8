//! Input/output helpers.
//!
//! - daily value ingest + synthetic data writing (`ingest`)
//! - bucketed series CSV export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
