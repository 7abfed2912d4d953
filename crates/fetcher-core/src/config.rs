use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Directory artifacts are written to when none is configured.
pub const DEFAULT_DIRECTORY: &str = "Fetched_Images";

/// Maximum wait per request in seconds when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Global configuration loaded from `~/.config/image-fetcher/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Where artifacts are written. Relative paths resolve against the working directory.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Max wait per request: connect timeout and the longest allowed stall while reading.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional `User-Agent` header (None = libcurl sends none).
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl FetcherConfig {
    /// Per-request timeout as a `Duration`. Zero is clamped to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("image-fetcher")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetcherConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetcherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
