//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! The console report goes to stdout; log records never do.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,reqtimer_core=debug,reqtimer=debug";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Opens `path` for appending, creating it and its parent dirs as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Initialize structured logging to `~/.local/state/reqtimer/reqtimer.log`.
///
/// On failure (e.g. log dir unwritable) returns Err so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("reqtimer")?;
    let log_file_path = xdg_dirs.get_state_home().join("reqtimer.log");
    let file = open_log_file(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    tracing::info!("reqtimer logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Logging to stderr only, warnings and up by default so the console report
/// stays readable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
