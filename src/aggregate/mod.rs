//! Time aggregation of daily sales values into week/month/year buckets.

pub mod flat_sheet;

pub use flat_sheet::*;
