//! Shared "report pipeline" logic used by the `report` and `summary` commands.
//!
//! read sources -> aggregate (revenue + quantity) -> charts -> document

use tracing::info;

use crate::aggregate::build_dataset;
use crate::domain::{DatasetKind, Measure, ReportConfig, ReportInputs};
use crate::error::ReportError;
use crate::io::{load_values, write_series_csv};
use crate::plot::PngChartRenderer;
use crate::report::{PdfRenderer, ReportAssembler, ReportOutcome};

/// Read the three sources once and aggregate every dataset the report needs.
pub fn load_inputs(config: &ReportConfig) -> Result<ReportInputs, ReportError> {
    let basic = load_values(&config.source_path(DatasetKind::Basic))?;
    let delux = load_values(&config.source_path(DatasetKind::Delux))?;
    let total = load_values(&config.source_path(DatasetKind::Total))?;
    info!(
        basic = basic.len(),
        delux = delux.len(),
        total = total.len(),
        "daily values loaded"
    );

    let b = &config.buckets;
    let revenue = |kind, values: &[f64]| build_dataset(kind, Measure::Revenue, values, config.price(kind), b);
    let quantity = |kind, values: &[f64]| build_dataset(kind, Measure::Quantity, values, 1.0, b);

    Ok(ReportInputs {
        basic: revenue(DatasetKind::Basic, &basic),
        delux: revenue(DatasetKind::Delux, &delux),
        total: revenue(DatasetKind::Total, &total),
        basic_quantity: quantity(DatasetKind::Basic, &basic),
        delux_quantity: quantity(DatasetKind::Delux, &delux),
    })
}

/// Run the full report with the PNG chart and PDF document backends.
pub fn run_report(config: &ReportConfig) -> Result<ReportOutcome, ReportError> {
    let inputs = load_inputs(config)?;

    if let Some(path) = &config.export_csv {
        let rows = write_series_csv(path, &inputs)?;
        info!(path = %path.display(), rows, "series exported");
    }

    let mut assembler = ReportAssembler::new(
        PngChartRenderer::new(config.chart_width, config.chart_height),
        PdfRenderer::default(),
    );
    assembler.assemble(config, &inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_values;

    #[test]
    fn inputs_are_priced_per_dataset() {
        let dir = tempfile::tempdir().unwrap();
        for kind in DatasetKind::ALL {
            write_values(&dir.path().join(kind.file_name()), &[1.0, 2.0]).unwrap();
        }
        let config = ReportConfig {
            data_dir: dir.path().to_path_buf(),
            ..ReportConfig::default()
        };

        let inputs = load_inputs(&config).unwrap();
        assert_eq!(inputs.basic.series.week, vec![15.0]);
        assert_eq!(inputs.delux.series.week, vec![18.0]);
        assert_eq!(inputs.total.series.week, vec![3.0]);
        assert_eq!(inputs.basic_quantity.series.day, vec![2.0, 1.0]);
        assert_eq!(inputs.delux_quantity.measure, Measure::Quantity);
    }

    #[test]
    fn missing_source_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            data_dir: dir.path().to_path_buf(),
            ..ReportConfig::default()
        };
        let err = load_inputs(&config).unwrap_err();
        assert!(matches!(err, ReportError::Open { .. }));
    }
}
