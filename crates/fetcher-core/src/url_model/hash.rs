//! Stable URL hash for synthesized filenames.

use sha2::{Digest, Sha256};

/// First 8 bytes of SHA-256 over the URL's UTF-8 bytes, read big-endian.
///
/// Identical across runs and platforms, unlike `std`'s randomized hasher.
pub fn url_hash(url: &str) -> u64 {
    let digest = Sha256::digest(url.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}
