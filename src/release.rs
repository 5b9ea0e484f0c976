//! Releases and the per-run release index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;
use crate::pagination::{PageFlow, PageSource, walk};

/// A published release, as listed by the releases collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    /// The commit this release was cut from.
    pub target_sha: String,
    pub body: Option<String>,
}

/// Mapping from boundary commit sha to the release cut from it.
///
/// Built once per run by draining the full releases listing and discarded
/// afterwards; nothing is cached across runs.
#[derive(Debug, Default)]
pub struct ReleaseIndex {
    by_sha: HashMap<String, Release>,
}

impl ReleaseIndex {
    pub fn contains(&self, sha: &str) -> bool {
        self.by_sha.contains_key(sha)
    }

    pub fn get(&self, sha: &str) -> Option<&Release> {
        self.by_sha.get(sha)
    }

    pub fn len(&self) -> usize {
        self.by_sha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sha.is_empty()
    }

    /// Insert a release keyed by its boundary commit. Last write wins when two
    /// releases target the same commit.
    fn insert(&mut self, release: Release) {
        if let Some(previous) = self.by_sha.insert(release.target_sha.clone(), release) {
            debug!(
                tag = %previous.tag_name,
                sha = %previous.target_sha,
                "release boundary collision, keeping the later-enumerated release"
            );
        }
    }
}

/// Drain every page of the releases listing into a [`ReleaseIndex`].
///
/// Never stops early: the nearest ancestor release can appear on any page, so
/// the full listing is required before ancestry resolution starts.
pub async fn build_release_index<S>(pages: &mut S) -> Result<ReleaseIndex, SourceError>
where
    S: PageSource<Item = Release> + ?Sized,
{
    let mut index = ReleaseIndex::default();
    walk(pages, |releases| {
        for release in releases {
            index.insert(release);
        }
        PageFlow::Continue
    })
    .await?;

    debug!(releases = index.len(), "release index built");
    Ok(index)
}
