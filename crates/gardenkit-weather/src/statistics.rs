//! Descriptive statistics over unordered sample sets.
//!
//! Quantiles use linear interpolation between closest ranks (R type 7, the
//! NumPy default). Inputs are never reordered: sorting happens on a copy.

use serde::{Deserialize, Serialize};

/// Summary of one sample set.
///
/// `mode` holds the median; the name is kept because stored data and charts
/// refer to the field by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub min: f64,
    pub p1: f64,
    pub p5: f64,
    pub p10: f64,
    pub mode: f64,
    pub mean: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
    /// Population standard deviation.
    pub stddev: f64,
    pub sum: f64,
    pub value_count: usize,
}

/// Returns the `q`-quantile of `samples`, `q` in `[0, 1]`.
///
/// Returns `None` for an empty sample set or a `q` outside `[0, 1]`.
pub fn quantile(samples: &[f64], q: f64) -> Option<f64> {
    let sorted = sorted_copy(samples);
    quantile_sorted(&sorted, q)
}

/// Same as [`quantile`] for samples already sorted ascending.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(next) if rest > 0.0 => Some(sorted[base] + rest * (next - sorted[base])),
        _ => Some(sorted[base]),
    }
}

/// Computes the summary statistics of `samples`, `None` if there are none.
pub fn get_stats(samples: &[f64]) -> Option<Stats> {
    let sorted = sorted_copy(samples);
    let n = sorted.len();
    let first = *sorted.first()?;
    let last = *sorted.last()?;

    let q = |p: f64| quantile_sorted(&sorted, p).unwrap_or(first);
    let sum: f64 = sorted.iter().sum();
    let mean = sum / n as f64;
    let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    Some(Stats {
        min: first,
        p1: q(0.01),
        p5: q(0.05),
        p10: q(0.10),
        mode: q(0.5),
        mean,
        p90: q(0.90),
        p95: q(0.95),
        p99: q(0.99),
        max: last,
        stddev: variance.sqrt(),
        sum,
        value_count: n,
    })
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
