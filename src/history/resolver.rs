//! Boundary resolution over a paginated ancestry listing.
//!
//! Finds where the freshly published release starts and where the nearest
//! earlier release ends, reading as few history pages as possible and caching
//! every commit seen along the way for the range linearizer.

use tracing::debug;

use crate::error::ResolveError;
use crate::pagination::{PageFlow, walk};
use crate::release::ReleaseIndex;

use super::{CommitCache, CommitHistorySource};

/// The two ends of a release diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    /// Boundary commit of the release being annotated. When several tags
    /// point at the same underlying commit this is the nearest descendant
    /// release actually responsible for the range.
    pub release_boundary: String,
    /// Boundary commit of the nearest ancestor release; `None` for the first
    /// release in the repository's history.
    pub parent_boundary: Option<String>,
}

/// Walk commit ancestry from each starting sha until both boundaries are
/// known, caching every visited commit.
///
/// `starts` is a worklist of pertinent starting points; in practice it holds
/// exactly the release's own target sha. A start that an earlier call already
/// visited is skipped without issuing a single read.
///
/// The walk maintains the nearest release boundary seen so far while moving
/// toward the past. Reaching `target_sha` pins the release boundary to that
/// nearest release; the next release-tagged commit after that point is the
/// parent boundary, and the walk stops there. Hitting an already-cached
/// commit also stops the walk, since its entire ancestry was visited before.
pub async fn resolve_boundaries<H>(
    history: &H,
    starts: &[String],
    index: &ReleaseIndex,
    target_sha: &str,
    cache: &mut CommitCache,
) -> Result<Boundaries, ResolveError>
where
    H: CommitHistorySource + ?Sized,
{
    for start in starts {
        if cache.contains(start) {
            debug!(sha = %start, "starting point already visited, skipping");
            continue;
        }

        let mut pages = history.ancestry(start);

        let mut nearest = start.clone();
        let mut release_boundary: Option<String> = None;
        let mut parent_boundary: Option<String> = None;

        walk(pages.as_mut(), |commits| {
            for commit in commits {
                if cache.contains(&commit.sha) {
                    // Everything below this commit was visited already.
                    return PageFlow::Stop;
                }
                let sha = commit.sha.clone();
                cache.insert(commit);

                if sha == target_sha {
                    release_boundary = Some(nearest.clone());
                } else if index.contains(&sha) {
                    nearest = sha.clone();
                    if release_boundary.is_some() {
                        if release_boundary.as_deref() != Some(sha.as_str()) {
                            parent_boundary = Some(sha);
                        }
                        // First release boundary at or past the target; the
                        // search is done either way.
                        return PageFlow::Stop;
                    }
                }
            }
            PageFlow::Continue
        })
        .await?;

        let Some(release_boundary) = release_boundary else {
            return Err(ResolveError::UnresolvedBoundary {
                target: target_sha.to_string(),
            });
        };

        debug!(
            release = %release_boundary,
            parent = parent_boundary.as_deref().unwrap_or("<root>"),
            visited = cache.len(),
            "boundaries resolved"
        );

        return Ok(Boundaries {
            release_boundary,
            parent_boundary,
        });
    }

    // Every starting point was already visited and none produced a result.
    Err(ResolveError::UnresolvedBoundary {
        target: target_sha.to_string(),
    })
}
