//! Request timer: reads URL lines in order, times one GET per line, and
//! aggregates the successful latencies.
//!
//! Requests are strictly sequential. A failed request is reported and skipped;
//! it never aborts the run. Only an unreadable input or an empty sample set
//! ends a run with an error.

mod clock;
mod report;

pub use clock::{Clock, MonotonicClock};
pub use report::{failure_line, metrics_line, success_line, Reporter};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::fetch::{self, FetchError, Fetcher};
use crate::stats::{self, Metrics, StatsError};
use crate::url_model;

/// One successful request: 2xx status, body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedRequest {
    /// Normalized URL that was requested.
    pub url: String,
    pub status: u32,
    /// From just before the request was sent until the last body byte arrived.
    pub elapsed: Duration,
    pub body_bytes: u64,
}

impl TimedRequest {
    /// Latency sample in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Latency samples (seconds) of successful requests, in file order.
    pub samples: Vec<f64>,
    /// Lines processed, including blank and failed ones.
    pub requests: usize,
    pub failures: usize,
    pub metrics: Metrics,
}

/// Errors that end a run. Per-request failures are not among them.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

pub struct RequestTimer<F, C = MonotonicClock> {
    fetcher: F,
    clock: C,
}

impl<F: Fetcher> RequestTimer<F, MonotonicClock> {
    pub fn new(fetcher: F) -> Self {
        Self::with_clock(fetcher, MonotonicClock)
    }
}

impl<F: Fetcher, C: Clock> RequestTimer<F, C> {
    pub fn with_clock(fetcher: F, clock: C) -> Self {
        Self { fetcher, clock }
    }

    /// Normalizes `line`, validates it, and times a single GET.
    ///
    /// Blank or malformed lines fail with `FetchError::InvalidUrl` without
    /// touching the network.
    pub fn time_line(&mut self, line: &str) -> Result<TimedRequest, FetchError> {
        let url = url_model::prepare(line)
            .map_err(|e| FetchError::invalid_url(url_model::normalize_url(line), &e))?;

        let start = self.clock.now();
        let resp = self.fetcher.get(&url)?;
        let elapsed = self.clock.now().saturating_duration_since(start);

        Ok(TimedRequest {
            url,
            status: resp.status,
            elapsed,
            body_bytes: resp.body_bytes,
        })
    }

    /// Processes every line of `input` in order, then aggregates once.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 turns into an invalid URL
    /// instead of a read error.
    pub fn run<R: BufRead>(
        &mut self,
        mut input: R,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport, RunError> {
        let mut samples = Vec::new();
        let mut requests = 0usize;
        let mut failures = 0usize;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = input
                .read_until(b'\n', &mut buf)
                .map_err(|source| RunError::Read {
                    line: requests + 1,
                    source,
                })?;
            if n == 0 {
                break;
            }
            requests += 1;
            let line = String::from_utf8_lossy(&buf);

            match self.time_line(&line) {
                Ok(timed) => {
                    tracing::debug!(
                        line = requests,
                        url = %timed.url,
                        status = timed.status,
                        bytes = timed.body_bytes,
                        secs = timed.secs(),
                        "request timed"
                    );
                    reporter.request_succeeded(&timed);
                    samples.push(timed.secs());
                }
                Err(err) => {
                    failures += 1;
                    tracing::warn!(
                        line = requests,
                        kind = %fetch::classify(&err),
                        "request failed: {}",
                        err
                    );
                    reporter.request_failed(&err);
                }
            }
        }

        tracing::info!(
            requests,
            failures,
            samples = samples.len(),
            "input exhausted"
        );

        let metrics = stats::compute_metrics(&samples)?;
        reporter.metrics(&metrics);

        Ok(RunReport {
            samples,
            requests,
            failures,
            metrics,
        })
    }
}

/// Opens `path` and runs a [`RequestTimer`] over it with `fetcher`.
///
/// The file is closed when this returns, on every path.
pub fn time_file<F: Fetcher>(
    path: &Path,
    fetcher: F,
    reporter: &mut dyn Reporter,
) -> Result<RunReport, RunError> {
    let open_err = |source| RunError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    if file.metadata().map_err(open_err)?.is_dir() {
        return Err(open_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }
    tracing::debug!(path = %path.display(), "reading urls");

    RequestTimer::new(fetcher).run(BufReader::new(file), reporter)
}
