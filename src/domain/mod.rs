//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - dataset and period enums (`DatasetKind`, `Period`, `Measure`)
//! - aggregated outputs (`PeriodSeries`, `Dataset`, `ReportInputs`)
//! - the run configuration (`ReportConfig`, `BucketLengths`)

pub mod types;

pub use types::*;
