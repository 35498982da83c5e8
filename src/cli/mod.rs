//! Command-line parsing for the sales report generator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! aggregation and rendering code. Every default reproduces the fixed paths and
//! prices of a plain `sales-report` run.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sales-report", version, about = "Daily sales aggregation and PDF report")]
pub struct Cli {
    /// Log level filter (error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Aggregate the data files, render charts, and write the PDF report.
    Report(ReportArgs),
    /// Print the summary blocks and a series overview to stdout.
    Summary(SourceArgs),
    /// Write synthetic daily data files.
    Generate(GenerateArgs),
}

/// Where the daily sources live and how they are priced.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Directory holding basic.txt, delux.txt and total.txt.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Price per basic unit.
    #[arg(long, default_value_t = 5.0)]
    pub basic_price: f64,

    /// Price per deluxe unit.
    #[arg(long, default_value_t = 6.0)]
    pub delux_price: f64,

    /// Report title.
    #[arg(long, default_value = "Matilda's bakery")]
    pub title: String,

    /// Currency symbol appended to summary values.
    #[arg(long, default_value = "€")]
    pub currency: String,
}

/// Options for the full report.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory charts are written to; every file in it is embedded in the PDF.
    #[arg(long, default_value = "img")]
    pub image_dir: PathBuf,

    /// Output PDF path.
    #[arg(short, long, default_value = "MatildaBakery.pdf")]
    pub output: PathBuf,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 512)]
    pub chart_width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 512)]
    pub chart_height: u32,

    /// Also export every bucketed series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

/// Options for synthetic data generation.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Directory the data files are written to.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Number of days to generate.
    #[arg(long, default_value_t = 400)]
    pub days: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Mean basic units sold per day.
    #[arg(long, default_value_t = 40.0)]
    pub basic_mean: f64,

    /// Mean deluxe units sold per day.
    #[arg(long, default_value_t = 15.0)]
    pub delux_mean: f64,

    /// Price per basic unit, used for total.txt.
    #[arg(long, default_value_t = 5.0)]
    pub basic_price: f64,

    /// Price per deluxe unit, used for total.txt.
    #[arg(long, default_value_t = 6.0)]
    pub delux_price: f64,
}
