//! Single-source fetch task
//!
//! One GET, one extraction pass, one validation pass. Everything that can
//! go wrong here is confined to the source: the collector treats any
//! [`FetchError`] as an empty contribution, so one unreachable page never
//! degrades the others.

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::extract::extract;
use crate::validator::is_valid_ip;
use tracing::{debug, info};

/// Fetch one source and return its validated addresses.
///
/// Issues a GET through the shared client (which carries the per-request
/// timeout), checks the HTTP status before touching the body, extracts
/// candidate tokens with the source's strategy, and keeps only tokens that
/// pass [`is_valid_ip`]. The returned list may contain duplicates; the
/// collector's set deduplicates across and within sources.
pub async fn fetch_source(
    client: &reqwest::Client,
    source: &SourceConfig,
) -> std::result::Result<Vec<String>, FetchError> {
    debug!("requesting {}", source.url);

    let response = client.get(&source.url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;

    let addresses: Vec<String> = extract(source.strategy, &body)
        .into_iter()
        .filter(|token| is_valid_ip(token))
        .collect();

    info!("extracted {} addresses from {}", addresses.len(), source.url);
    Ok(addresses)
}
