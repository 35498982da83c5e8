//! Flat-sheet aggregation.
//!
//! A "flat sheet" is the raw daily sequence in file order (oldest first, most
//! recent last). Aggregation walks it backwards so that bucket 0 of every
//! period starts at the most recent day.
//!
//! Each period keeps its own day counter over the same walk: the n-th processed
//! day (0-based) lands in bucket `n / length`. When a counter reaches its
//! length a new zero-seeded bucket is opened, so the oldest bucket may be
//! partial, or an empty trailing `0.0` when the walk ends on a boundary.

use crate::domain::{BucketLengths, Dataset, DatasetKind, Measure, PeriodSeries};

/// Accumulator for a single period type.
struct Buckets {
    length: usize,
    days: usize,
    sums: Vec<f64>,
}

impl Buckets {
    fn new(length: usize) -> Self {
        Self {
            length,
            days: 0,
            sums: vec![0.0],
        }
    }

    fn push(&mut self, value: f64) {
        // `sums` is seeded with one bucket and only ever grows.
        if let Some(current) = self.sums.last_mut() {
            *current += value;
        }
        self.days += 1;
        if self.days >= self.length {
            self.days = 0;
            self.sums.push(0.0);
        }
    }
}

/// Clamp a multiplier so it never shrinks a raw value.
pub fn clamp_multiplier(multiplier: f64) -> f64 {
    // `f64::max` also maps NaN to 1.0.
    multiplier.max(1.0)
}

/// Aggregate daily values into day/week/month/year series.
///
/// `values` is in file order (most recent day last). Every output series is
/// most-recent-first.
pub fn aggregate(values: &[f64], multiplier: f64, lengths: &BucketLengths) -> PeriodSeries {
    let multiplier = clamp_multiplier(multiplier);

    let mut day = Vec::with_capacity(values.len());
    let mut week = Buckets::new(lengths.week());
    let mut month = Buckets::new(lengths.month());
    let mut year = Buckets::new(lengths.year());

    for raw in values.iter().rev() {
        let scaled = raw * multiplier;
        day.push(scaled);
        week.push(scaled);
        month.push(scaled);
        year.push(scaled);
    }

    PeriodSeries {
        day,
        week: week.sums,
        month: month.sums,
        year: year.sums,
    }
}

/// Aggregate a source into a named dataset.
pub fn build_dataset(
    kind: DatasetKind,
    measure: Measure,
    values: &[f64],
    multiplier: f64,
    lengths: &BucketLengths,
) -> Dataset {
    let multiplier = clamp_multiplier(multiplier);
    Dataset {
        kind,
        measure,
        multiplier,
        series: aggregate(values, multiplier, lengths),
    }
}
