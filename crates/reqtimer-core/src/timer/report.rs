//! Reporting boundary: per-request lines and the final summary.

use crate::fetch::FetchError;
use crate::stats::Metrics;

use super::TimedRequest;

/// Receives the outcome of every request in file order, then the metrics.
///
/// `metrics` is only called when aggregation succeeded.
pub trait Reporter {
    fn request_succeeded(&mut self, timed: &TimedRequest);
    fn request_failed(&mut self, err: &FetchError);
    fn metrics(&mut self, metrics: &Metrics);
}

/// `Time taken: 0.123, status: 200`
pub fn success_line(timed: &TimedRequest) -> String {
    format!("Time taken: {}, status: {}", timed.secs(), timed.status)
}

/// Error line naming the failing URL and, for HTTP errors, the status.
pub fn failure_line(err: &FetchError) -> String {
    match err {
        FetchError::InvalidUrl { url, .. } => format!("Invalid url: {}", url),
        FetchError::Status { url, status } => {
            format!("Error at GET {}, status: {}", url, status)
        }
        FetchError::Transport { url, source } => format!("Error at GET {}: {}", url, source),
    }
}

pub fn metrics_line(metrics: &Metrics) -> String {
    format!(
        "Time metrics -> Mean: {}, Median: {}, 90th percentile: {}.",
        metrics.mean, metrics.median, metrics.p90
    )
}
