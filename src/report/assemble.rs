//! Report assembly: charts first, then the document that embeds them.
//!
//! The assembler only decides *what* goes where; drawing is delegated to a
//! `ChartRenderer` and layout to a `DocumentRenderer`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{ReportConfig, ReportInputs};
use crate::error::ReportError;
use crate::plot::ChartRenderer;
use crate::report::{
    DocumentRenderer, DocumentSection, ReportDocument, chart_jobs, format_block_lines, summary_blocks,
};

pub const CHARTS_HEADING: &str = "Some cool charts";

/// What a report run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub charts: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Regular files in `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let list_err = |source| ReportError::ImageDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if entry.file_type().map_err(list_err)?.is_file() {
            images.push(entry.path());
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Build the document content for a run.
pub fn build_document(config: &ReportConfig, inputs: &ReportInputs, images: Vec<PathBuf>) -> ReportDocument {
    let sections = summary_blocks(inputs)
        .iter()
        .map(|block| DocumentSection {
            heading: block.heading.clone(),
            lines: format_block_lines(block, &config.currency),
        })
        .collect();

    ReportDocument {
        title: config.title.clone(),
        subtitle: config
            .generated_on
            .map(|d| format!("Generated on {}", d.format("%Y-%m-%d"))),
        sections,
        charts_heading: CHARTS_HEADING.to_string(),
        images,
    }
}

pub struct ReportAssembler<C, D> {
    charts: C,
    document: D,
}

impl<C: ChartRenderer, D: DocumentRenderer> ReportAssembler<C, D> {
    pub fn new(charts: C, document: D) -> Self {
        Self { charts, document }
    }

    /// Render every chart into the image directory, then the document.
    ///
    /// The document embeds every file in the image directory at that point,
    /// not only the charts written by this run.
    pub fn assemble(&mut self, config: &ReportConfig, inputs: &ReportInputs) -> Result<ReportOutcome, ReportError> {
        fs::create_dir_all(&config.image_dir).map_err(|source| ReportError::Write {
            path: config.image_dir.clone(),
            source,
        })?;

        let mut charts = Vec::new();
        for job in chart_jobs(inputs) {
            let path = config.image_dir.join(job.file_name);
            self.charts.render(&job.chart, &path)?;
            debug!(chart = %job.chart.title, path = %path.display(), "rendered chart");
            charts.push(path);
        }
        info!(count = charts.len(), dir = %config.image_dir.display(), "charts written");

        let images = list_images(&config.image_dir)?;
        let document = build_document(config, inputs, images.clone());
        self.document.render(&document, &config.output)?;
        info!(
            output = %config.output.display(),
            images = images.len(),
            "report written"
        );

        Ok(ReportOutcome {
            charts,
            images,
            output: config.output.clone(),
        })
    }
}
