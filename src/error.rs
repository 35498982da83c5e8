//! Error type shared by every stage of the report pipeline.
//!
//! Per-line parse failures never reach this type; they are skipped by the
//! ingest code. Everything here is fatal for a run and is mapped to an exit
//! code by the binary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{}' after {parsed} values: {source}", .path.display())]
    Read {
        path: PathBuf,
        parsed: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list image directory '{}': {source}", .path.display())]
    ImageDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render chart '{title}': {message}")]
    Chart { title: String, message: String },

    #[error("Failed to generate document '{}': {message}", .path.display())]
    Document { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl ReportError {
    /// Process exit code for this error.
    ///
    /// - 2: input/output or configuration problems
    /// - 4: chart or document library failures
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Open { .. }
            | ReportError::Read { .. }
            | ReportError::Write { .. }
            | ReportError::ImageDir { .. }
            | ReportError::Config(_)
            | ReportError::Csv(_) => 2,
            ReportError::Chart { .. } | ReportError::Document { .. } => 4,
        }
    }
}
