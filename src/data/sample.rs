//! Synthetic daily sales generation.
//!
//! Produces plausible unit counts for the two products (weekly rhythm, a mild
//! yearly season, Gaussian noise) plus the matching daily revenue, written in
//! the same one-value-per-line format the report reads.

use std::f64::consts::TAU;
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use tracing::info;

use crate::domain::DatasetKind;
use crate::error::ReportError;
use crate::io::write_values;

/// Relative noise applied to the expected daily units.
const NOISE_FRACTION: f64 = 0.2;
/// Weekend days sell this much more than weekdays.
const WEEKEND_BOOST: f64 = 1.4;
/// Amplitude of the yearly season.
const SEASON_AMPLITUDE: f64 = 0.15;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub days: usize,
    pub seed: u64,
    pub basic_mean: f64,
    pub delux_mean: f64,
    pub basic_price: f64,
    pub delux_price: f64,
}

/// Daily series, oldest first.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub basic: Vec<f64>,
    pub delux: Vec<f64>,
    pub total: Vec<f64>,
}

impl SampleData {
    pub fn values(&self, kind: DatasetKind) -> &[f64] {
        match kind {
            DatasetKind::Basic => &self.basic,
            DatasetKind::Delux => &self.delux,
            DatasetKind::Total => &self.total,
        }
    }
}

pub fn generate_sample(config: &SampleConfig) -> Result<SampleData, ReportError> {
    if config.days == 0 {
        return Err(ReportError::Config("Sample day count must be > 0.".to_string()));
    }
    let means_ok = [config.basic_mean, config.delux_mean]
        .iter()
        .all(|m| m.is_finite() && *m >= 0.0);
    if !means_ok {
        return Err(ReportError::Config("Mean daily units must be finite and >= 0.".to_string()));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0).map_err(|e| ReportError::Config(format!("Noise distribution error: {e}")))?;

    let mut basic = Vec::with_capacity(config.days);
    let mut delux = Vec::with_capacity(config.days);
    let mut total = Vec::with_capacity(config.days);

    for day in 0..config.days {
        let factor = demand_factor(day);
        let b = daily_units(config.basic_mean * factor, normal.sample(&mut rng));
        let d = daily_units(config.delux_mean * factor, normal.sample(&mut rng));
        basic.push(b);
        delux.push(d);
        total.push(b * config.basic_price + d * config.delux_price);
    }

    Ok(SampleData { basic, delux, total })
}

/// Write `basic.txt`, `delux.txt` and `total.txt` into `dir`.
pub fn write_sample(dir: &Path, sample: &SampleData) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    for kind in DatasetKind::ALL {
        write_values(&dir.join(kind.file_name()), sample.values(kind))?;
    }
    info!(dir = %dir.display(), days = sample.basic.len(), "sample data written");
    Ok(())
}

fn demand_factor(day: usize) -> f64 {
    let weekday = if day % 7 >= 5 { WEEKEND_BOOST } else { 1.0 };
    let season = 1.0 + SEASON_AMPLITUDE * (TAU * day as f64 / 365.0).sin();
    weekday * season
}

fn daily_units(expected: f64, z: f64) -> f64 {
    (expected + expected * NOISE_FRACTION * z).round().max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_values;

    fn config(days: usize, seed: u64) -> SampleConfig {
        SampleConfig {
            days,
            seed,
            basic_mean: 40.0,
            delux_mean: 15.0,
            basic_price: 5.0,
            delux_price: 6.0,
        }
    }

    #[test]
    fn sample_is_deterministic_per_seed() {
        let a = generate_sample(&config(60, 7)).unwrap();
        let b = generate_sample(&config(60, 7)).unwrap();
        let c = generate_sample(&config(60, 8)).unwrap();
        assert_eq!(a.basic, b.basic);
        assert_ne!(a.basic, c.basic);
    }

    #[test]
    fn total_is_daily_revenue() {
        let s = generate_sample(&config(30, 1)).unwrap();
        assert_eq!(s.basic.len(), 30);
        for i in 0..30 {
            assert!(s.basic[i] >= 0.0 && s.basic[i].fract() == 0.0);
            assert_eq!(s.total[i], s.basic[i] * 5.0 + s.delux[i] * 6.0);
        }
    }

    #[test]
    fn zero_days_is_rejected() {
        assert!(generate_sample(&config(0, 1)).is_err());
    }

    #[test]
    fn written_sample_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let s = generate_sample(&config(20, 3)).unwrap();
        write_sample(dir.path(), &s).unwrap();
        assert_eq!(load_values(&dir.path().join("delux.txt")).unwrap(), s.delux);
        assert_eq!(load_values(&dir.path().join("total.txt")).unwrap(), s.total);
    }
}
