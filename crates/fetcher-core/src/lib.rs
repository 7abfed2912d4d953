pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod input;
pub mod report;
pub mod storage;
pub mod url_model;

pub use batch::{run_batch, BatchSummary};
pub use config::FetcherConfig;
pub use error::{ErrorKind, SaveError};
pub use fetcher::{DuplicateKind, Fetcher, SaveOutcome};
pub use report::Reporter;
