//! Configuration types for ip-harvester

use crate::extract::{ExtractionStrategy, strategy_for_url};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One page to scrape for published addresses
///
/// Immutable after construction. The extraction strategy is fixed per
/// source rather than sniffed from content, so an unexpected page layout
/// degrades to an empty result instead of mis-parsing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page URL, fetched once per run with a plain GET
    pub url: String,

    /// Which HTML structure to search for candidate tokens
    #[serde(default)]
    pub strategy: ExtractionStrategy,
}

impl SourceConfig {
    /// Build a source, deriving the strategy from the known-URL lookup
    /// (unrecognized URLs fall back to list-item extraction).
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let strategy = strategy_for_url(&url);
        Self { url, strategy }
    }
}

/// Harvester configuration
///
/// `Default` carries the compiled-in source list; no configuration file is
/// read. The struct exists so embedding callers can substitute their own
/// sources, output path, or limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Sources to fetch (default: the three known public lists)
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,

    /// Output file path (default: "ip.txt")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Maximum concurrent fetches (default: 5)
    ///
    /// Bounds politeness toward the remote hosts, not local resources.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_fetches: usize,

    /// Per-request timeout (default: 10 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output_path: default_output_path(),
            max_concurrent_fetches: default_max_concurrent(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new("https://api.uouin.com/cloudflare.html"),
        SourceConfig::new("https://ip.164746.xyz"),
        SourceConfig::new("https://cf.vvhan.com/"),
    ]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("ip.txt")
}

fn default_max_concurrent() -> usize {
    5
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}
