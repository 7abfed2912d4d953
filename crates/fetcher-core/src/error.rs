//! Per-URL failure type returned by the fetch-and-store unit.

use std::fmt;
use thiserror::Error;

use crate::fetch::TransferError;

/// How a failed request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failure, timeout, or non-success HTTP status.
    Network,
    /// Anything else: directory creation, file write, etc.
    Unclassified,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => f.write_str("network"),
            ErrorKind::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// A request that produced no artifact.
#[derive(Debug, Error)]
#[error("{kind} error for {url}: {message}")]
pub struct SaveError {
    pub url: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl SaveError {
    pub fn network(url: &str, err: &TransferError) -> Self {
        Self {
            url: url.to_string(),
            kind: ErrorKind::Network,
            message: err.to_string(),
        }
    }

    pub fn unclassified(url: &str, err: impl fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            kind: ErrorKind::Unclassified,
            message: err.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}
