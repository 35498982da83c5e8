//! Text formatting shared by the PDF and the `summary` command.
//!
//! We keep formatting code in one place so output changes are localized.

use crate::domain::ReportInputs;
use crate::report::{SummaryBlock, SummaryLine};

/// `"<Label>:\t<value> <currency>"` with the value at two decimals.
pub fn format_summary_line(line: &SummaryLine, currency: &str) -> String {
    format!("{}:\t{:.2} {}", line.kind.summary_label(), line.value, currency)
}

/// All lines of a block, formatted.
pub fn format_block_lines(block: &SummaryBlock, currency: &str) -> Vec<String> {
    block
        .lines
        .iter()
        .map(|l| format_summary_line(l, currency))
        .collect()
}

/// Summary blocks as plain text, one heading per block.
pub fn format_summary(title: &str, blocks: &[SummaryBlock], currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {title} ===\n"));
    for block in blocks {
        out.push('\n');
        out.push_str(&block.heading);
        out.push('\n');
        for line in format_block_lines(block, currency) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Bucket counts and latest buckets per dataset.
pub fn format_series_overview(inputs: &ReportInputs) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<8} {:<9} {:>6} {:>6} {:>6} {:>7} {:>6} {:>12} {:>12}",
            "dataset", "measure", "mult", "days", "weeks", "months", "years", "last week", "last month"
        )
        .trim_end(),
    );
    out.push('\n');

    for ds in inputs.all() {
        let s = &ds.series;
        out.push_str(
            format!(
                "{:<8} {:<9} {:>6.2} {:>6} {:>6} {:>7} {:>6} {:>12.2} {:>12.2}",
                ds.kind.chart_label(),
                format!("{:?}", ds.measure).to_lowercase(),
                ds.multiplier,
                s.day.len(),
                s.week.len(),
                s.month.len(),
                s.year.len(),
                s.week.first().copied().unwrap_or(0.0),
                s.month.first().copied().unwrap_or(0.0),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}
