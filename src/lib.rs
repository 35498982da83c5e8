//! `sales-report` library crate.
//!
//! The binary (`sales-report`) is a thin wrapper around this library so that:
//!
//! - aggregation and report assembly are testable without spawning processes
//! - chart and document backends can be swapped through traits
//! - code stays easy to navigate as the project grows

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
