//! Exponential backoff retry for transient GitHub read failures.
//!
//! Only reads go through here. The release-body update is never retried; a
//! failed update surfaces to the invoking framework instead.

use std::future::Future;
use std::time::Duration;

use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use tracing::warn;

/// Configuration: 3 total attempts, base 1s, max 30s.
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_INTERVAL_SECS: u64 = 1;
const MAX_INTERVAL_SECS: u64 = 30;

/// Retry an async GitHub call on transient failures.
///
/// Structured API rejections (4xx) propagate immediately; server errors and
/// transport failures are retried with exponentially increasing sleeps.
pub(crate) async fn retry_transient<T, Fut, F>(mut attempt: F) -> Result<T, octocrab::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, octocrab::Error>>,
{
    let mut backoff = ExponentialBackoff {
        initial_interval: Duration::from_secs(INITIAL_INTERVAL_SECS),
        max_interval: Duration::from_secs(MAX_INTERVAL_SECS),
        max_elapsed_time: None,
        ..Default::default()
    };

    let mut attempts = 0;
    loop {
        attempts += 1;
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if attempts < MAX_ATTEMPTS && is_transient(&err) => {
                warn!(attempt = attempts, error = %err, "transient GitHub error, retrying");
                if let Some(wait) = backoff.next_backoff() {
                    tokio::time::sleep(wait).await;
                }
            }
            Err(err) => return Err(err),
        }
    }
}

fn is_transient(err: &octocrab::Error) -> bool {
    match err {
        octocrab::Error::GitHub { source, .. } => source.status_code.is_server_error(),
        octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => true,
        _ => false,
    }
}
