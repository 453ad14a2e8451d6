//! # ip-harvester
//!
//! Concurrently scrapes a small set of web pages that publish IPv4
//! endpoint lists, validates and deduplicates the addresses, and writes
//! the sorted result to a flat file.
//!
//! ## Design Philosophy
//!
//! - **Best-effort per source** - one unreachable page never degrades the
//!   others; failures are logged, not propagated
//! - **Fixed strategies** - each source's HTML location is declared up
//!   front, never sniffed from content
//! - **Library-first** - the binary is a thin wrapper; embedding callers
//!   drive the same [`run`] entry point with their own [`Config`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use ip_harvester::{Config, run};
//!
//! #[tokio::main]
//! async fn main() -> ip_harvester::Result<()> {
//!     let written = run(&Config::default()).await?;
//!     println!("{written} addresses collected");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Concurrent collection and aggregation
pub mod collector;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Per-source HTML extraction strategies
pub mod extract;
/// Single-source fetch task
pub mod fetcher;
/// IPv4 address validation
pub mod validator;
/// Output artifact writing
pub mod writer;

// Re-export commonly used types
pub use collector::collect;
pub use config::{Config, SourceConfig};
pub use error::{Error, FetchError, Result};
pub use extract::{ExtractionStrategy, extract, strategy_for_url};
pub use fetcher::fetch_source;
pub use validator::is_valid_ip;
pub use writer::write_addresses;

/// User-Agent presented to the scraped sources
const USER_AGENT: &str = concat!("ip-harvester/", env!("CARGO_PKG_VERSION"));

/// Run the whole pipeline once: fetch every configured source, aggregate
/// the validated addresses, and persist the sorted set to the configured
/// output path. Returns the number of addresses written.
///
/// # Errors
///
/// Fails only on setup (HTTP client construction) or persistence; source
/// failures are absorbed per the best-effort policy.
pub async fn run(config: &Config) -> Result<usize> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let addresses = collector::collect(&client, &config.sources, config.max_concurrent_fetches).await;

    writer::write_addresses(&addresses, &config.output_path)
}
