//! Export bucketed series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per bucket, most recent bucket at index 0.

use std::path::Path;

use serde::Serialize;

use crate::domain::{DatasetKind, Measure, Period, ReportInputs};
use crate::error::ReportError;

#[derive(Debug, Serialize)]
struct SeriesRow {
    dataset: DatasetKind,
    measure: Measure,
    period: Period,
    index: usize,
    value: f64,
}

/// Write every series of every dataset to a CSV file.
pub fn write_series_csv(path: &Path, inputs: &ReportInputs) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut rows = 0usize;

    for dataset in inputs.all() {
        for period in Period::ALL {
            for (index, &value) in dataset.series.get(period).iter().enumerate() {
                writer.serialize(SeriesRow {
                    dataset: dataset.kind,
                    measure: dataset.measure,
                    period,
                    index,
                    value,
                })?;
                rows += 1;
            }
        }
    }

    writer.flush().map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(rows)
}
