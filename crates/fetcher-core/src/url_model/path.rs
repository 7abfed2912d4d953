//! Filename extraction from URL path.

use percent_encoding::percent_decode_str;

/// Returns the text after the last `/` of the URL path, percent-decoded.
///
/// `Url::parse` percent-encodes non-ASCII and spaces, so decoding gives back
/// the name as typed (`猫 cat.jpg`, not `%E7%8C%AB%20cat.jpg`).
///
/// Returns `None` if the URL cannot be parsed, the path ends in `/`, or the
/// decoded segment is not valid UTF-8 or not a usable filename (contains `/`
/// or NUL, or is `.` / `..`). Query and fragment are never part of the result.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    if decoded.contains(['/', '\0']) || decoded == "." || decoded == ".." {
        return None;
    }
    Some(decoded.into_owned())
}
