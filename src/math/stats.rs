//! Summary statistics over bucketed series.

/// Truncate (floor) a value to two decimal places.
pub fn truncate_2dp(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Arithmetic mean truncated to two decimals.
///
/// Returns `None` for an empty series. Bucketed series always carry at least
/// one entry, so callers holding one can rely on `Some`.
pub fn truncated_average(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let mean = series.iter().sum::<f64>() / series.len() as f64;
    Some(truncate_2dp(mean))
}
