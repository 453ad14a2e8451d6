//! Concurrent collection and aggregation
//!
//! Dispatches one fetch task per source, bounded by a semaphore, and
//! unions every successful result into a single deduplicated set. The set
//! is the only shared mutable state in the pipeline; its mutex is held for
//! in-memory inserts only, never across I/O.

use crate::config::SourceConfig;
use crate::fetcher::fetch_source;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

/// Fetch all sources concurrently and return the deduplicated union of
/// their validated addresses.
///
/// Task completion order is non-deterministic and does not affect the
/// result. Every per-source failure (transport, bad status, task panic) is
/// logged and contributes nothing; the call itself cannot fail. Returns
/// once every dispatched task has finished; the only time bound is each
/// request's own timeout.
pub async fn collect(
    client: &reqwest::Client,
    sources: &[SourceConfig],
    max_concurrent: usize,
) -> HashSet<String> {
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let results: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));

    let mut tasks = JoinSet::new();
    for source in sources.iter().cloned() {
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        let results = Arc::clone(&results);

        tasks.spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                // Semaphore is never closed while tasks run; bail quietly
                Err(_) => return,
            };

            match fetch_source(&client, &source).await {
                Ok(addresses) => {
                    let mut set = results.lock().unwrap_or_else(PoisonError::into_inner);
                    set.extend(addresses);
                }
                Err(err) => warn!("source {} failed: {}", source.url, err),
            }
        });
    }

    // Join-all barrier: the set is immutable once this loop finishes.
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            warn!("fetch task aborted: {}", err);
        }
    }

    let mut guard = results.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::take(&mut *guard)
}
