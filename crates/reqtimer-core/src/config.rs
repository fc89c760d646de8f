use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/reqtimer/config.toml`.
///
/// There is no timeout setting: requests run to completion. Missing fields
/// take their `Default` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReqtimerConfig {
    /// Follow `Location` redirects; the timed latency then covers the whole chain.
    pub follow_redirects: bool,
    /// Upper bound on redirects followed per request.
    pub max_redirections: u32,
    /// `User-Agent` header; defaults to `reqtimer/<version>` when unset.
    pub user_agent: Option<String>,
    /// Extra request headers sent with every GET (e.g. `Authorization`).
    pub headers: HashMap<String, String>,
}

impl Default for ReqtimerConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirections: 10,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl ReqtimerConfig {
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("reqtimer/{}", env!("CARGO_PKG_VERSION")))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("reqtimer").context("locate XDG base directories")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReqtimerConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit location.
pub fn load_or_init_at(path: &Path) -> Result<ReqtimerConfig> {
    if !path.exists() {
        let default_cfg = ReqtimerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg).context("serialize default config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(path)
}

/// Loads the default config file, falling back to built-in defaults when the
/// config location is unusable. A bad config dir never stops a run.
pub fn load_or_default() -> ReqtimerConfig {
    match load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            ReqtimerConfig::default()
        }
    }
}

/// Load configuration from an explicit file (no default is written).
pub fn load_from_path(path: &Path) -> Result<ReqtimerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ReqtimerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
