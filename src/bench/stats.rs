//! Summary statistics over repeated runs.

use serde::{Deserialize, Serialize};

/// Best / mean / population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Minimum value.
    pub best: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation; 0 for a single value.
    pub stdev: f64,
}

/// Arithmetic mean, `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Summarizes a sample. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use u_tsp::bench::summarize;
///
/// let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s.best, 2.0);
/// assert!((s.mean - 5.0).abs() < 1e-12);
/// assert!((s.stdev - 2.0).abs() < 1e-12);
/// ```
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let best = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = mean(values);
    let stdev = if values.len() > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        var.sqrt()
    } else {
        0.0
    };
    Some(Summary { best, mean, stdev })
}
