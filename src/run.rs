//! One full release-notes run, from event to published body.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::classify::{PullRequest, classify};
use crate::config::ConfigSource;
use crate::error::{RunError, SourceError};
use crate::history::{CommitCache, CommitHistorySource, build_range, resolve_boundaries};
use crate::pagination::PageSource;
use crate::release::{Release, build_release_index};
use crate::render::render;

/// The "release created" event that triggers a run.
#[derive(Debug, Clone)]
pub struct ReleaseEvent {
    pub release_id: u64,
    pub tag_name: String,
    /// The commit the release was cut from. The prevailing assumption is that
    /// this is always a sha, not a branch name.
    pub target_sha: String,
}

/// Writes the finished notes into the release body.
#[async_trait]
pub trait Publisher: Sync {
    async fn publish(
        &self,
        release_id: u64,
        tag_name: &str,
        body: &str,
    ) -> Result<(), SourceError>;
}

/// Compute and publish release notes for one release event.
///
/// Strictly sequential: release index, boundary resolution, range
/// linearization, config load, classification, rendering, then exactly one
/// publish call. Every failure aborts before the publish, so the release body
/// is only ever updated with a complete changelog. All intermediate state
/// (commit cache, release index) lives and dies inside this call.
///
/// Returns the published body.
pub async fn handle_release<R, H, P, C, U>(
    event: &ReleaseEvent,
    releases: &mut R,
    history: &H,
    pulls: &mut P,
    config_source: &C,
    publisher: &U,
) -> Result<String, RunError>
where
    R: PageSource<Item = Release> + ?Sized,
    H: CommitHistorySource + ?Sized,
    P: PageSource<Item = PullRequest> + ?Sized,
    C: ConfigSource + ?Sized,
    U: Publisher + ?Sized,
{
    info!(tag = %event.tag_name, sha = %event.target_sha, "handling release event");

    let index = build_release_index(releases).await?;

    let mut cache = CommitCache::new();
    let starts = [event.target_sha.clone()];
    let boundaries =
        resolve_boundaries(history, &starts, &index, &event.target_sha, &mut cache).await?;

    let range = build_range(&cache, &boundaries)?;
    debug!(commits = range.len(), "release range linearized");

    let config = config_source.load().await?;
    let changes = classify(pulls, &range, &config).await?;

    let body = render(&changes);
    publisher
        .publish(event.release_id, &event.tag_name, &body)
        .await?;

    info!(tag = %event.tag_name, "release notes published");
    Ok(body)
}
