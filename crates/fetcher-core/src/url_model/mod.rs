//! URL modeling and filename derivation.
//!
//! Uses the last URL path segment when it looks like a filename, otherwise
//! synthesizes `image_<hash>.jpg` from a stable hash of the whole URL.

mod hash;
mod path;

pub use hash::url_hash;
pub use path::filename_from_url_path;

/// Extension given to synthesized filenames.
const FALLBACK_EXTENSION: &str = "jpg";

/// Derives the local filename for `url`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/cat.jpg")` → `"cat.jpg"`
/// - `derive_filename("https://example.com/")` → `"image_<H>.jpg"`
pub fn derive_filename(url: &str) -> String {
    match filename_from_url_path(url) {
        Some(name) if name.contains('.') => name,
        _ => synthesized_filename(url),
    }
}

/// `image_<H>.jpg`, where `H` is [`url_hash`] in decimal.
pub fn synthesized_filename(url: &str) -> String {
    format!("image_{}.{}", url_hash(url), FALLBACK_EXTENSION)
}
