//! Human-readable status lines for the user.
//!
//! Kept separate from `tracing`: these go to stdout, logs go to the log file.

use std::io::{self, Write};

use crate::batch::BatchSummary;
use crate::error::{ErrorKind, SaveError};
use crate::fetcher::{DuplicateKind, SaveOutcome};

pub const PROMPT: &str = "Please enter image URLs (separate multiple URLs with commas): ";

/// Writes report messages to any output stream (stdout in the CLI).
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the Ubuntu Image Fetcher")?;
        writeln!(self.out, "A tool for mindfully collecting images from the web")?;
        writeln!(self.out)
    }

    /// Prompt without a trailing newline; flushed so it shows before stdin blocks.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    pub fn no_urls(&mut self) -> io::Result<()> {
        writeln!(self.out, "No URLs provided. Exiting.")
    }

    pub fn outcome(&mut self, outcome: &SaveOutcome) -> io::Result<()> {
        match outcome {
            SaveOutcome::Saved { filename, path, .. } => {
                writeln!(self.out, "✓ Successfully fetched: {}", filename)?;
                writeln!(self.out, "✓ Image saved to {}", path.display())?;
                writeln!(self.out, "🌍 Connection strengthened. Community enriched.")?;
                writeln!(self.out)
            }
            SaveOutcome::Skipped {
                filename,
                duplicate,
                ..
            } => {
                writeln!(
                    self.out,
                    "⚠️ Image already exists: {}. Skipping download.",
                    filename
                )?;
                if *duplicate == DuplicateKind::NameCollision {
                    writeln!(
                        self.out,
                        "  (existing file has different content; it was kept unchanged)"
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn error(&mut self, err: &SaveError) -> io::Result<()> {
        match err.kind {
            ErrorKind::Network => writeln!(
                self.out,
                "✗ Connection error while fetching {}: {}",
                err.url, err.message
            ),
            ErrorKind::Unclassified => writeln!(self.out, "✗ An error occurred: {}", err.message),
        }
    }

    pub fn summary(&mut self, s: &BatchSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Done: {} saved, {} skipped, {} failed.",
            s.saved, s.skipped, s.failed
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut r = Reporter::new(Vec::new());
        f(&mut r).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn welcome_banner() {
        let s = render(|r| r.welcome());
        assert_eq!(
            s,
            "Welcome to the Ubuntu Image Fetcher\nA tool for mindfully collecting images from the web\n\n"
        );
    }

    #[test]
    fn saved_lines() {
        let o = SaveOutcome::Saved {
            filename: "cat.jpg".into(),
            path: PathBuf::from("Fetched_Images/cat.jpg"),
            bytes: 3,
        };
        let s = render(|r| r.outcome(&o));
        assert!(s.starts_with("✓ Successfully fetched: cat.jpg\n✓ Image saved to Fetched_Images/cat.jpg\n"));
        assert!(s.ends_with("Community enriched.\n\n"));
    }

    #[test]
    fn skipped_lines() {
        let mut o = SaveOutcome::Skipped {
            filename: "cat.jpg".into(),
            path: PathBuf::from("d/cat.jpg"),
            duplicate: DuplicateKind::Identical,
        };
        let s = render(|r| r.outcome(&o));
        assert_eq!(s, "⚠️ Image already exists: cat.jpg. Skipping download.\n");

        if let SaveOutcome::Skipped { duplicate, .. } = &mut o {
            *duplicate = DuplicateKind::NameCollision;
        }
        let s = render(|r| r.outcome(&o));
        assert_eq!(s.lines().count(), 2);
        assert!(s.contains("different content"));
    }

    #[test]
    fn error_lines() {
        let net = SaveError {
            url: "http://x/a.png".into(),
            kind: ErrorKind::Network,
            message: "HTTP 404".into(),
        };
        assert_eq!(
            render(|r| r.error(&net)),
            "✗ Connection error while fetching http://x/a.png: HTTP 404\n"
        );
        let other = SaveError {
            url: "http://x/a.png".into(),
            kind: ErrorKind::Unclassified,
            message: "disk full".into(),
        };
        assert_eq!(render(|r| r.error(&other)), "✗ An error occurred: disk full\n");
    }

    #[test]
    fn prompt_and_no_urls() {
        assert_eq!(render(|r| r.prompt()), PROMPT);
        assert_eq!(render(|r| r.no_urls()), "No URLs provided. Exiting.\n");
    }
}
