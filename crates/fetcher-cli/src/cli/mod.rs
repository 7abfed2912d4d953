//! CLI for the image fetcher.

mod run;

use anyhow::Result;
use clap::Parser;
use fetcher_core::config::{self, FetcherConfig};
use std::path::PathBuf;

use run::run_fetch;

/// Download images from URLs into a local directory, skipping files that already exist.
#[derive(Debug, Parser)]
#[command(name = "image-fetcher", version)]
#[command(about = "Fetch images from URLs into a local directory", long_about = None)]
pub struct Cli {
    /// Image URLs (comma-separated lists allowed). Prompts on stdin when omitted.
    #[arg(value_name = "URLS")]
    pub urls: Vec<String>,

    /// Directory to save images in (overrides config).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Max seconds to wait per request (overrides config).
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let cfg = cli.apply_overrides(cfg);
        run_fetch(cfg, &cli.urls)
    }

    /// Command-line flags take precedence over config file values.
    pub fn apply_overrides(&self, mut cfg: FetcherConfig) -> FetcherConfig {
        if let Some(dir) = &self.dir {
            cfg.directory = dir.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        cfg
    }
}
