//! The fixed set of charts embedded in the report.
//!
//! Each chart selects an index window of one period series from several
//! datasets. Windows are clamped to what the series actually holds, so short
//! histories produce shorter lines instead of failing.

use std::ops::Range;

use crate::domain::{Dataset, Period, ReportInputs};
use crate::plot::{ChartSeries, LineChart};

/// A chart together with the file name it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    pub file_name: &'static str,
    pub chart: LineChart,
}

/// Slice `series[range]`, clamped to the series length.
pub fn window(series: &[f64], range: Range<usize>) -> &[f64] {
    let end = range.end.min(series.len());
    let start = range.start.min(end);
    &series[start..end]
}

fn line_chart(
    title: &str,
    y_label: &str,
    datasets: &[&Dataset],
    period: Period,
    range: Range<usize>,
) -> LineChart {
    LineChart {
        title: title.to_string(),
        x_label: "Time".to_string(),
        y_label: y_label.to_string(),
        series: datasets
            .iter()
            .map(|ds| {
                ChartSeries::new(
                    ds.kind.chart_label(),
                    window(ds.series.get(period), range.clone()),
                )
            })
            .collect(),
    }
}

/// Build every chart of the report, in output order.
pub fn chart_jobs(inputs: &ReportInputs) -> Vec<ChartJob> {
    let revenue = inputs.revenue();
    let quantity = inputs.quantity();

    vec![
        ChartJob {
            file_name: "lastYearProfitPerMonth.png",
            chart: line_chart("Last year profit (per month)", "Profit", &revenue, Period::Month, 0..12),
        },
        ChartJob {
            file_name: "month1ProfitPerWeek.png",
            chart: line_chart("Last month profit (per week)", "Profit", &revenue, Period::Week, 0..4),
        },
        ChartJob {
            file_name: "month2ProfitPerWeek.png",
            chart: line_chart("2 months ago profit (per week)", "Profit", &revenue, Period::Week, 4..8),
        },
        ChartJob {
            file_name: "month3ProfitPerWeek.png",
            chart: line_chart("3 months ago profit (per week)", "Profit", &revenue, Period::Week, 8..12),
        },
        ChartJob {
            file_name: "cupcakesSold.png",
            chart: line_chart(
                "Cupcakes sold (per day, last month)",
                "Quantity",
                &quantity,
                Period::Day,
                0..30,
            ),
        },
    ]
}
