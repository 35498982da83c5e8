//! Plotters-powered line charts written as PNG files.
//!
//! A chart is a plain description (`LineChart`): a title, axis labels and an
//! ordered list of `(label, values)` series. Rendering is behind the
//! `ChartRenderer` trait so the report can be driven with a fake in tests.

use std::path::Path;
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::register_font;

use crate::error::ReportError;

/// Font family every chart text element uses.
pub const CHART_FONT: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Register the bundled font with Plotters, once per process.
pub fn ensure_chart_font() -> Result<(), String> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(CHART_FONT, FontStyle::Normal, DEJAVU_SANS)
                .map_err(|_| "bundled chart font is not a valid TrueType font".to_string())
        })
        .clone()
}

/// One named line on a chart. X is the index into `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, values: &[f64]) -> Self {
        Self {
            label: label.into(),
            values: values.to_vec(),
        }
    }
}

/// A render-only chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    /// X bounds covering the longest series.
    pub fn x_bounds(&self) -> (f64, f64) {
        let longest = self.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        (0.0, longest.saturating_sub(1).max(1) as f64)
    }

    /// Y bounds including zero with a little headroom.
    pub fn y_bounds(&self) -> (f64, f64) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite());

        let (lo, hi) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        if span <= 0.0 {
            return (lo, lo + 1.0);
        }
        (lo, hi + span * 0.1)
    }
}

/// Something that turns a chart description into a file.
pub trait ChartRenderer {
    fn render(&mut self, chart: &LineChart, path: &Path) -> Result<(), ReportError>;
}

/// Raster PNG renderer backed by Plotters' bitmap backend.
#[derive(Debug, Clone, Copy)]
pub struct PngChartRenderer {
    pub width: u32,
    pub height: u32,
}

impl PngChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&mut self, chart: &LineChart, path: &Path) -> Result<(), ReportError> {
        ensure_chart_font().map_err(|message| ReportError::Chart {
            title: chart.title.clone(),
            message,
        })?;
        draw_png(chart, path, (self.width, self.height)).map_err(|e| ReportError::Chart {
            title: chart.title.clone(),
            message: e.to_string(),
        })
    }
}

fn draw_png(chart: &LineChart, path: &Path, size: (u32, u32)) -> Result<(), Box<dyn std::error::Error>> {
    let (x0, x1) = chart.x_bounds();
    let (y0, y1) = chart.y_bounds();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (CHART_FONT, 20))
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(8)
        .y_labels(8)
        .label_style((CHART_FONT, 12))
        .draw()?;

    for (idx, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .map(|(x, &y)| (x as f64, y))
            .collect();

        ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        // Point markers, matching the "line and points" look of the report.
        ctx.draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((CHART_FONT, 12))
        .draw()?;

    root.present()?;
    Ok(())
}
