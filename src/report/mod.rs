//! Reporting: summary statistics, chart selection, document assembly, and
//! formatted terminal output.

pub mod assemble;
pub mod charts;
pub mod document;
pub mod format;

pub use assemble::*;
pub use charts::*;
pub use document::*;
pub use format::*;

use crate::domain::{Dataset, DatasetKind, ReportInputs};
use crate::math::truncated_average;

pub const LAST_YEAR_HEADING: &str = "How much money did I make last year?";
pub const TYPICAL_MONTH_HEADING: &str = "How much money do I make in a typical month?";

/// One labelled value of a summary block.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub kind: DatasetKind,
    pub value: f64,
}

/// A question heading followed by one value per revenue dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBlock {
    pub heading: String,
    pub lines: Vec<SummaryLine>,
}

/// Revenue of the most recent year bucket, per dataset.
pub fn last_year_totals(inputs: &ReportInputs) -> SummaryBlock {
    block(LAST_YEAR_HEADING, inputs, |ds| {
        ds.series.year.first().copied().unwrap_or(0.0)
    })
}

/// Truncated average of the month buckets, per dataset.
pub fn typical_month(inputs: &ReportInputs) -> SummaryBlock {
    block(TYPICAL_MONTH_HEADING, inputs, |ds| {
        truncated_average(&ds.series.month).unwrap_or(0.0)
    })
}

/// Both summary blocks in report order.
pub fn summary_blocks(inputs: &ReportInputs) -> Vec<SummaryBlock> {
    vec![last_year_totals(inputs), typical_month(inputs)]
}

fn block(heading: &str, inputs: &ReportInputs, value: impl Fn(&Dataset) -> f64) -> SummaryBlock {
    SummaryBlock {
        heading: heading.to_string(),
        lines: inputs
            .revenue()
            .into_iter()
            .map(|ds| SummaryLine {
                kind: ds.kind,
                value: value(ds),
            })
            .collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::constant_inputs;
    use super::*;

    #[test]
    fn last_year_uses_the_most_recent_year_bucket() {
        // 400 days: bucket 0 holds 365 days, bucket 1 the remaining 35.
        let inputs = constant_inputs(400, 2.0, 1.0);
        let block = last_year_totals(&inputs);

        assert_eq!(block.heading, LAST_YEAR_HEADING);
        let values: Vec<f64> = block.lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![365.0 * 10.0, 365.0 * 6.0, 365.0 * 16.0]);
        let kinds: Vec<DatasetKind> = block.lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, DatasetKind::ALL.to_vec());
    }

    #[test]
    fn typical_month_averages_every_month_bucket() {
        // 45 days at 1 unit of basic: months are [30*5, 15*5].
        let inputs = constant_inputs(45, 1.0, 0.0);
        let block = typical_month(&inputs);
        assert_eq!(block.lines[0].value, 112.5);
        assert_eq!(block.lines[1].value, 0.0);
    }

    #[test]
    fn empty_inputs_summarise_to_zero() {
        let inputs = constant_inputs(0, 1.0, 1.0);
        for block in summary_blocks(&inputs) {
            assert!(block.lines.iter().all(|l| l.value == 0.0));
        }
    }
}
