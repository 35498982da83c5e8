//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initialises logging
//! - builds the run configuration
//! - dispatches to report / summary / sample generation

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Command, GenerateArgs, ReportArgs, SourceArgs};
use crate::data::{SampleConfig, generate_sample, write_sample};
use crate::domain::ReportConfig;
use crate::error::ReportError;

pub mod pipeline;

/// Entry point for the `sales-report` binary.
pub fn run() -> Result<(), ReportError> {
    // A bare `sales-report` (or one starting with flags) runs the report.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(&cli.log_level);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Summary(args) => handle_summary(args),
        Command::Generate(args) => handle_generate(args),
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level`; an unparsable level falls back to `info`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Ignore a second initialisation (e.g. when embedded in tests).
    tracing_subscriber::registry().with(filter).with(layer).try_init().ok();
}

fn handle_report(args: ReportArgs) -> Result<(), ReportError> {
    let config = report_config_from_args(&args);
    let outcome = pipeline::run_report(&config)?;
    info!(
        output = %outcome.output.display(),
        charts = outcome.charts.len(),
        images = outcome.images.len(),
        "done"
    );
    Ok(())
}

fn handle_summary(args: SourceArgs) -> Result<(), ReportError> {
    let config = source_config_from_args(&args);
    let inputs = pipeline::load_inputs(&config)?;
    let blocks = crate::report::summary_blocks(&inputs);

    println!(
        "{}",
        crate::report::format_summary(&config.title, &blocks, &config.currency)
    );
    println!("{}", crate::report::format_series_overview(&inputs));
    Ok(())
}

fn handle_generate(args: GenerateArgs) -> Result<(), ReportError> {
    let config = SampleConfig {
        days: args.days,
        seed: args.seed,
        basic_mean: args.basic_mean,
        delux_mean: args.delux_mean,
        basic_price: args.basic_price,
        delux_price: args.delux_price,
    };
    let sample = generate_sample(&config)?;
    write_sample(&args.data_dir, &sample)
}

pub fn source_config_from_args(args: &SourceArgs) -> ReportConfig {
    ReportConfig {
        data_dir: args.data_dir.clone(),
        title: args.title.clone(),
        currency: args.currency.clone(),
        basic_price: args.basic_price,
        delux_price: args.delux_price,
        ..ReportConfig::default()
    }
}

pub fn report_config_from_args(args: &ReportArgs) -> ReportConfig {
    ReportConfig {
        image_dir: args.image_dir.clone(),
        output: args.output.clone(),
        generated_on: Some(chrono::Local::now().date_naive()),
        chart_width: args.chart_width,
        chart_height: args.chart_height,
        export_csv: args.export_csv.clone(),
        ..source_config_from_args(&args.source)
    }
}

/// Rewrite argv so `sales-report` defaults to `sales-report report`.
///
/// Rules:
/// - `sales-report`                 -> `sales-report report`
/// - `sales-report --output x ...`  -> `sales-report report --output x ...`
/// - `sales-report --help/--version/-h` -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "summary" | "generate");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn logging_can_be_initialised_twice() {
        init_logging("info");
        init_logging("debug");
    }

    #[test]
    fn bare_invocation_runs_the_report() {
        assert_eq!(rewrite_args(argv(&["sales-report"])), argv(&["sales-report", "report"]));
        assert_eq!(
            rewrite_args(argv(&["sales-report", "-o", "out.pdf"])),
            argv(&["sales-report", "report", "-o", "out.pdf"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(
            rewrite_args(argv(&["sales-report", "summary"])),
            argv(&["sales-report", "summary"])
        );
        assert_eq!(rewrite_args(argv(&["sales-report", "--help"])), argv(&["sales-report", "--help"]));
    }

    #[test]
    fn report_args_become_config() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(argv(&[
            "sales-report",
            "--data-dir",
            "fixtures",
            "--currency",
            "EUR",
            "--export-csv",
            "series.csv",
        ])));
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };

        let config = report_config_from_args(&args);
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.image_dir, PathBuf::from("img"));
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.export_csv, Some(PathBuf::from("series.csv")));
        assert!(config.generated_on.is_some());
    }
}
