//! Linearize the first-parent chain between two release boundaries.

use crate::error::ResolveError;

use super::{Boundaries, CommitCache};

/// Collect the shas from the newer boundary (inclusive) down to the older
/// boundary (exclusive), in descendant-to-ancestor order.
///
/// Only linear history is diffable: a commit with more than one parent is a
/// [`ResolveError::NonLinearRange`]. Running out of parents is valid only
/// when there is no parent boundary, i.e. the very first release.
pub fn build_range(cache: &CommitCache, boundaries: &Boundaries) -> Result<Vec<String>, ResolveError> {
    let mut range = Vec::new();
    let mut next = Some(boundaries.release_boundary.clone());

    loop {
        let Some(sha) = next else {
            // Root reached. Fine for the first release ever, an inconsistency
            // otherwise.
            match &boundaries.parent_boundary {
                None => return Ok(range),
                Some(parent) => {
                    return Err(ResolveError::MissingCommit { sha: parent.clone() });
                }
            }
        };

        if boundaries.parent_boundary.as_deref() == Some(sha.as_str()) {
            return Ok(range);
        }

        let commit = cache
            .get(&sha)
            .ok_or_else(|| ResolveError::MissingCommit { sha: sha.clone() })?;

        if commit.parent_shas.len() > 1 {
            return Err(ResolveError::NonLinearRange {
                sha: sha.clone(),
                parent_count: commit.parent_shas.len(),
            });
        }

        range.push(sha);
        next = commit.parent_shas.first().cloned();
    }
}
