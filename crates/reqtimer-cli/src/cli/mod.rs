//! CLI for reqtimer: time a GET for every URL in a file, then print
//! mean, median and 90th percentile latency.

mod console;

use anyhow::{Context, Result};
use clap::Parser;
use reqtimer_core::config::{self, ReqtimerConfig};
use reqtimer_core::fetch::CurlFetcher;
use reqtimer_core::stats::StatsError;
use reqtimer_core::timer::{self, RunError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

pub use console::Console;

#[derive(Debug, Parser)]
#[command(name = "reqtimer", version)]
#[command(about = "Time sequential HTTP GETs for a list of URLs and report latency statistics", long_about = None)]
pub struct Cli {
    /// File to read URLs from, one per line.
    #[arg(short = 'f', long = "file-path", value_name = "PATH")]
    pub file_path: PathBuf,

    /// Config file to use instead of ~/.config/reqtimer/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print without ANSI colors.
    #[arg(long)]
    pub no_color: bool,
}

/// How a run ended, as far as the exit code is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// Input file missing or unreadable.
    InvalidPath,
    /// Every request failed; no metrics were printed.
    NoSamples,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => ExitCode::SUCCESS,
            RunStatus::InvalidPath | RunStatus::NoSamples => ExitCode::FAILURE,
        }
    }
}

impl Cli {
    /// An explicit `--config` must load; the default location falls back to
    /// built-in defaults when unusable.
    fn load_config(&self) -> Result<ReqtimerConfig> {
        match &self.config {
            Some(path) => config::load_from_path(path),
            None => Ok(config::load_or_default()),
        }
    }
}

pub fn run_from_args() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = cli.load_config()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let mut console = Console::stdout(cli.no_color);
    let status = run(&cli, &cfg, &mut console)?;
    Ok(status.into())
}

/// Prints the banner, times every URL in `cli.file_path`, and reports through
/// `console`. Bad input paths and empty sample sets are reported, not returned
/// as errors.
pub fn run<W: Write>(
    cli: &Cli,
    cfg: &ReqtimerConfig,
    console: &mut Console<W>,
) -> Result<RunStatus> {
    console.banner();

    let fetcher = CurlFetcher::new(cfg).context("initialize HTTP client")?;
    match timer::time_file(&cli.file_path, fetcher, &mut *console) {
        Ok(report) => {
            tracing::info!(
                requests = report.requests,
                failures = report.failures,
                "run completed"
            );
            Ok(RunStatus::Completed)
        }
        Err(RunError::Open { path, source }) => {
            tracing::error!("cannot open {}: {}", path.display(), source);
            console.error(&format!("Invalid file path {}!", path.display()));
            console.error("Please provide a valid full file path!");
            Ok(RunStatus::InvalidPath)
        }
        Err(RunError::Stats(StatsError::EmptySampleSet)) => {
            console.error("No successful requests; time metrics are unavailable.");
            Ok(RunStatus::NoSamples)
        }
        Err(err) => Err(err).context("request timer run failed"),
    }
}
