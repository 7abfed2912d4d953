//! Fetch run: collect URLs, then process them one by one.

use anyhow::{Context, Result};
use fetcher_core::config::FetcherConfig;
use fetcher_core::input::{collect_url_args, read_url_list};
use fetcher_core::{run_batch, Fetcher, Reporter};
use std::io::{self, BufRead, Write};

pub fn run_fetch(cfg: FetcherConfig, args: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    fetch_with_io(cfg, args, stdin.lock(), stdout.lock())
}

/// Runs the whole pipeline against the given streams. With no URL arguments,
/// shows the banner and reads one line from `input`.
pub(crate) fn fetch_with_io<R: BufRead, W: Write>(
    cfg: FetcherConfig,
    args: &[String],
    input: R,
    output: W,
) -> Result<()> {
    let mut reporter = Reporter::new(output);
    reporter.welcome()?;

    let urls = if args.is_empty() {
        reporter.prompt()?;
        read_url_list(input).context("failed to read URLs from stdin")?
    } else {
        collect_url_args(args)
    };

    if urls.is_empty() {
        tracing::info!("no URLs provided");
        reporter.no_urls()?;
        return Ok(());
    }

    tracing::info!(
        count = urls.len(),
        dir = %cfg.directory.display(),
        timeout_secs = cfg.timeout_secs,
        "starting fetch"
    );
    let fetcher = Fetcher::new(cfg);
    let summary = run_batch(&fetcher, &urls, &mut reporter)?;
    reporter.summary(&summary)?;
    Ok(())
}
