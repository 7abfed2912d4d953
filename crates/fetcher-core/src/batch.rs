//! Sequential batch runner: every URL, in input order, one at a time.

use std::io::{self, Write};

use crate::fetcher::{Fetcher, SaveOutcome};
use crate::report::Reporter;

/// Counts of what happened to each request in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}

/// Runs `fetcher` over `urls` and reports each result.
///
/// Per-URL failures are reported and counted, never propagated; only a
/// failure to write to the report stream stops the batch.
pub fn run_batch<W: Write>(
    fetcher: &Fetcher,
    urls: &[String],
    reporter: &mut Reporter<W>,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for url in urls {
        match fetcher.save_image(url) {
            Ok(outcome) => {
                match outcome {
                    SaveOutcome::Saved { .. } => summary.saved += 1,
                    SaveOutcome::Skipped { .. } => summary.skipped += 1,
                }
                reporter.outcome(&outcome)?;
            }
            Err(err) => {
                tracing::warn!(url = %err.url, kind = %err.kind, "{}", err.message);
                summary.failed += 1;
                reporter.error(&err)?;
            }
        }
    }
    tracing::info!(
        saved = summary.saved,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}
