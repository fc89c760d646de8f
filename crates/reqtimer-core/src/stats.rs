//! Latency statistics over a finished sample set (mean, median, 90th percentile).
//!
//! Samples are seconds as `f64`. Zero is a valid sample; only failed requests
//! are absent, and those never reach this module.

use thiserror::Error;

/// Percentile reported as `p90`.
const P90: f64 = 90.0;

/// Aggregate metrics for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mean: f64,
    pub median: f64,
    /// 90th percentile, linearly interpolated between closest ranks.
    pub p90: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// No request succeeded, so there is nothing to aggregate.
    #[error("no latency samples to aggregate")]
    EmptySampleSet,
    /// A sample was negative, NaN or infinite.
    #[error("invalid latency sample at index {index}: {value}")]
    InvalidSample { index: usize, value: f64 },
}

/// Computes mean, median and p90 over `samples`.
///
/// Fails with [`StatsError::EmptySampleSet`] when there are no samples.
pub fn compute_metrics(samples: &[f64]) -> Result<Metrics, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySampleSet);
    }
    if let Some((index, &value)) = samples
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(StatsError::InvalidSample { index, value });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(Metrics {
        mean: mean(samples),
        median: median(&sorted),
        p90: percentile(&sorted, P90),
    })
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Median of an ascending, non-empty slice.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percentile `q` (0..=100) of an ascending slice, interpolating linearly
/// between the two closest ranks (`rank = q/100 * (n - 1)`).
///
/// Returns NaN for an empty slice; `q` is clamped to `[0, 100]`.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => return f64::NAN,
        1 => return sorted[0],
        _ => {}
    }
    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
