//! Artifact files on disk.
//!
//! Files are created with `create_new`, so an existing artifact is never
//! truncated or overwritten, even if it appears after the existence check.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Result of [`write_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    AlreadyExists,
}

/// Creates `dir` and any missing parents. No error if it already exists.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Writes `data` to a new file at `path`.
///
/// Returns `AlreadyExists` without touching the file if `path` exists.
/// On a failed write the partial file is removed.
pub fn write_new(path: &Path, data: &[u8]) -> io::Result<WriteStatus> {
    let mut file = match File::options().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(WriteStatus::AlreadyExists)
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = file.write_all(data).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(rm) = fs::remove_file(path) {
            tracing::warn!("could not remove partial file {}: {}", path.display(), rm);
        }
        return Err(e);
    }
    Ok(WriteStatus::Written)
}
