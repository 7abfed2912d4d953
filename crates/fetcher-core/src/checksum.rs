//! SHA-256 digests used to tell identical duplicates from name collisions.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

pub type Digest256 = [u8; 32];

/// SHA-256 of an in-memory body.
pub fn sha256_bytes(data: &[u8]) -> Digest256 {
    Sha256::digest(data).into()
}

/// SHA-256 of a file, read in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> Result<Digest256> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().into())
}

/// True if the file at `path` holds exactly `data`.
pub fn file_matches(path: &Path, data: &[u8]) -> Result<bool> {
    Ok(sha256_path(path)? == sha256_bytes(data))
}
