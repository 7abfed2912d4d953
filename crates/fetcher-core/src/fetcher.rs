//! Fetch-and-store unit: one URL in, one artifact (or skip, or error) out.

use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::FetcherConfig;
use crate::error::SaveError;
use crate::fetch::{self, FetchOptions};
use crate::storage::{self, WriteStatus};
use crate::url_model::derive_filename;

/// Why an existing artifact caused a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    /// Existing file holds the same bytes as the fetched body.
    Identical,
    /// Existing file holds different bytes under the same name.
    NameCollision,
    /// Existing file could not be read for comparison.
    Unverified,
}

/// Successful handling of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved {
        filename: String,
        path: PathBuf,
        bytes: u64,
    },
    Skipped {
        filename: String,
        path: PathBuf,
        duplicate: DuplicateKind,
    },
}

impl SaveOutcome {
    pub fn filename(&self) -> &str {
        match self {
            SaveOutcome::Saved { filename, .. } | SaveOutcome::Skipped { filename, .. } => filename,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Saved { path, .. } | SaveOutcome::Skipped { path, .. } => path,
        }
    }
}

/// Downloads images into the configured directory, one blocking GET per call.
#[derive(Debug, Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.config.timeout(),
            user_agent: self.config.user_agent.clone(),
        }
    }

    /// Fetches `url` and stores the body under the configured directory.
    ///
    /// An artifact that already exists is left untouched and reported as
    /// [`SaveOutcome::Skipped`]. Every failure is returned as a [`SaveError`]
    /// so the caller can move on to the next URL.
    pub fn save_image(&self, url: &str) -> Result<SaveOutcome, SaveError> {
        let dir = &self.config.directory;
        storage::ensure_dir(dir).map_err(|e| {
            SaveError::unclassified(url, format!("cannot create {}: {}", dir.display(), e))
        })?;

        let body = fetch::fetch_bytes(url, &self.fetch_options()).map_err(|e| {
            if e.is_timeout() {
                tracing::warn!(url, "no response within {:?}", self.config.timeout());
            }
            SaveError::network(url, &e)
        })?;

        let filename = derive_filename(url);
        let path = dir.join(&filename);

        if path.exists() {
            return Ok(self.skipped(filename, path, &body));
        }

        match storage::write_new(&path, &body) {
            Ok(WriteStatus::Written) => {
                tracing::info!(url, path = %path.display(), bytes = body.len(), "saved image");
                Ok(SaveOutcome::Saved {
                    filename,
                    path,
                    bytes: body.len() as u64,
                })
            }
            Ok(WriteStatus::AlreadyExists) => Ok(self.skipped(filename, path, &body)),
            Err(e) => Err(SaveError::unclassified(
                url,
                format!("cannot write {}: {}", path.display(), e),
            )),
        }
    }

    fn skipped(&self, filename: String, path: PathBuf, body: &[u8]) -> SaveOutcome {
        let duplicate = match checksum::file_matches(&path, body) {
            Ok(true) => DuplicateKind::Identical,
            Ok(false) => {
                tracing::warn!(path = %path.display(), "existing file differs from fetched body");
                DuplicateKind::NameCollision
            }
            Err(e) => {
                tracing::warn!("could not compare {}: {:#}", path.display(), e);
                DuplicateKind::Unverified
            }
        };
        tracing::info!(path = %path.display(), ?duplicate, "skipped existing image");
        SaveOutcome::Skipped {
            filename,
            path,
            duplicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fetcher_in(dir: &Path) -> Fetcher {
        Fetcher::new(FetcherConfig {
            directory: dir.to_path_buf(),
            timeout_secs: 2,
            user_agent: None,
        })
    }

    #[test]
    fn outcome_accessors() {
        let o = SaveOutcome::Skipped {
            filename: "a.png".into(),
            path: PathBuf::from("/d/a.png"),
            duplicate: DuplicateKind::Identical,
        };
        assert_eq!(o.filename(), "a.png");
        assert_eq!(o.path(), Path::new("/d/a.png"));
    }

    #[test]
    fn bad_url_is_network_error_and_creates_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("images");
        let f = fetcher_in(&dir);
        let err = f.save_image("nope://example.invalid/a.png").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.url, "nope://example.invalid/a.png");
        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn directory_blocked_by_file_is_unclassified() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("images");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let f = fetcher_in(&blocker.join("sub"));
        let err = f.save_image("http://127.0.0.1:9/a.png").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unclassified);
    }
}
