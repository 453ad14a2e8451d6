//! Error types for ip-harvester
//!
//! Two layers of errors exist:
//! - [`Error`] is the public, run-level error type. Only persistence and
//!   setup failures surface through it; a failed source never does.
//! - [`FetchError`] is internal control flow for a single source fetch.
//!   The collector absorbs every variant into an empty contribution and
//!   reports it through the log stream only.

use thiserror::Error;

/// Result type alias for ip-harvester operations
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level error type
///
/// Anything that reaches this type aborts the run. Per-source failures are
/// deliberately not representable here.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while deleting or writing the output artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failure of a single source fetch
///
/// Returned by [`crate::fetcher::fetch_source`]; never propagated past the
/// collector, which logs the variant and treats the source as empty.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (timeout, DNS failure, connection refused)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Source answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
}
