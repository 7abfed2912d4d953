//! Single-stream HTTP GET into memory.
//!
//! Uses the curl crate (libcurl easy interface). Runs in the current thread.

use std::time::Duration;
use thiserror::Error;

/// Bytes per second below which a transfer counts as stalled.
const LOW_SPEED_LIMIT: u32 = 1;

/// Redirect hops followed before giving up.
const MAX_REDIRECTIONS: u32 = 10;

/// Transport options for one GET.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Bounded wait: connect timeout and the longest tolerated stall.
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

/// A GET that did not produce a 2xx body.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Curl reported an error (invalid URL, DNS, connect, timeout, read).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// URL has no scheme, or one other than `http`/`https`. Never sent to curl.
    #[error("missing or unsupported scheme in {0:?} (expected http:// or https://)")]
    UnsupportedScheme(String),
}

impl TransferError {
    /// True when the transfer was aborted by the bounded wait.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransferError::Curl(e) if e.is_operation_timedout())
    }
}

/// Parses `url`, accepting only `http` and `https`.
///
/// libcurl would otherwise guess `http://` for a bare host, or read local
/// files for `file://`. The parsed form is percent-encoded and safe to hand
/// to curl as-is.
pub fn check_scheme(url: &str) -> Result<url::Url, TransferError> {
    match url::Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Ok(u),
        _ => Err(TransferError::UnsupportedScheme(url.to_string())),
    }
}

/// Fetches `url` with a single GET and returns the full body.
///
/// Rejects non-HTTP(S) URLs before any transfer. Follows redirects. Aborts
/// when connecting takes longer than `opts.timeout` or when no data arrives
/// for `opts.timeout`.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, TransferError> {
    let target = check_scheme(url)?;
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(target.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.connect_timeout(opts.timeout)?;
    easy.low_speed_limit(LOW_SPEED_LIMIT)?;
    easy.low_speed_time(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::debug!(url, code, "GET returned non-success status");
        return Err(TransferError::Http(code));
    }

    tracing::debug!(url, bytes = body.len(), "GET complete");
    Ok(body)
}
