//! Shared domain types.
//!
//! These types describe the three sales datasets, the period granularities the
//! aggregator produces, and the run configuration that replaces hard-coded
//! paths and prices.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ReportError;

/// One of the three daily input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Basic,
    Delux,
    Total,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::Basic, DatasetKind::Delux, DatasetKind::Total];

    /// File name of the source inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::Basic => "basic.txt",
            DatasetKind::Delux => "delux.txt",
            DatasetKind::Total => "total.txt",
        }
    }

    /// Legend label used in charts.
    pub fn chart_label(self) -> &'static str {
        match self {
            DatasetKind::Basic => "Basic",
            DatasetKind::Delux => "Delux",
            DatasetKind::Total => "Total",
        }
    }

    /// Label used in the summary blocks.
    pub fn summary_label(self) -> &'static str {
        match self {
            DatasetKind::Basic => "Basic",
            DatasetKind::Delux => "Deluxe",
            DatasetKind::Total => "Total",
        }
    }
}

/// Aggregation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    pub fn key(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

/// Whether a dataset holds scaled revenue or raw unit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Revenue,
    Quantity,
}

/// Fixed bucket lengths (in days) for the week/month/year series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketLengths {
    week: usize,
    month: usize,
    year: usize,
}

impl BucketLengths {
    pub fn new(week: usize, month: usize, year: usize) -> Result<Self, ReportError> {
        if week == 0 || month == 0 || year == 0 {
            return Err(ReportError::Config(format!(
                "bucket lengths must be positive (week={week}, month={month}, year={year})"
            )));
        }
        Ok(Self { week, month, year })
    }

    pub fn week(&self) -> usize {
        self.week
    }

    pub fn month(&self) -> usize {
        self.month
    }

    pub fn year(&self) -> usize {
        self.year
    }
}

impl Default for BucketLengths {
    fn default() -> Self {
        Self {
            week: 7,
            month: 30,
            year: 365,
        }
    }
}

/// Bucketed sums for every period, most recent bucket first.
///
/// `week`, `month` and `year` always hold at least one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSeries {
    pub day: Vec<f64>,
    pub week: Vec<f64>,
    pub month: Vec<f64>,
    pub year: Vec<f64>,
}

impl PeriodSeries {
    pub fn get(&self, period: Period) -> &[f64] {
        match period {
            Period::Day => &self.day,
            Period::Week => &self.week,
            Period::Month => &self.month,
            Period::Year => &self.year,
        }
    }
}

/// A dataset aggregated under one multiplier.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub measure: Measure,
    pub multiplier: f64,
    pub series: PeriodSeries,
}

/// Everything the report needs: revenue for all three sources and unit counts
/// for the two products.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub basic: Dataset,
    pub delux: Dataset,
    pub total: Dataset,
    pub basic_quantity: Dataset,
    pub delux_quantity: Dataset,
}

impl ReportInputs {
    pub fn revenue(&self) -> [&Dataset; 3] {
        [&self.basic, &self.delux, &self.total]
    }

    pub fn quantity(&self) -> [&Dataset; 2] {
        [&self.basic_quantity, &self.delux_quantity]
    }

    pub fn all(&self) -> [&Dataset; 5] {
        [
            &self.basic,
            &self.delux,
            &self.total,
            &self.basic_quantity,
            &self.delux_quantity,
        ]
    }
}

/// Run configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_dir: PathBuf,
    pub image_dir: PathBuf,
    pub output: PathBuf,

    pub title: String,
    pub currency: String,
    /// Date printed under the title; `None` omits the line.
    pub generated_on: Option<NaiveDate>,

    pub basic_price: f64,
    pub delux_price: f64,
    pub buckets: BucketLengths,

    pub chart_width: u32,
    pub chart_height: u32,

    pub export_csv: Option<PathBuf>,
}

impl ReportConfig {
    pub fn source_path(&self, kind: DatasetKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Multiplier applied to a source when aggregating revenue.
    pub fn price(&self, kind: DatasetKind) -> f64 {
        match kind {
            DatasetKind::Basic => self.basic_price,
            DatasetKind::Delux => self.delux_price,
            DatasetKind::Total => 1.0,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            image_dir: PathBuf::from("img"),
            output: PathBuf::from("MatildaBakery.pdf"),
            title: "Matilda's bakery".to_string(),
            currency: "€".to_string(),
            generated_on: None,
            basic_price: 5.0,
            delux_price: 6.0,
            buckets: BucketLengths::default(),
            chart_width: 512,
            chart_height: 512,
            export_csv: None,
        }
    }
}
