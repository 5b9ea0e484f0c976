//! Commit ancestry: the per-run commit cache, boundary resolution, and range
//! linearization.

pub mod range;
pub mod resolver;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pagination::PageSource;

pub use range::build_range;
pub use resolver::{Boundaries, resolve_boundaries};

/// A commit as listed by the history collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    /// Parent shas in parent order. Range building requires at most one.
    pub parent_shas: Vec<String>,
}

/// Every commit visited during one resolution run, keyed by sha.
///
/// Write-once per sha and owned by a single run; repeated resolution calls
/// share it so an already-visited starting point costs zero reads.
#[derive(Debug, Default)]
pub struct CommitCache {
    by_sha: HashMap<String, Commit>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sha: &str) -> bool {
        self.by_sha.contains_key(sha)
    }

    pub fn get(&self, sha: &str) -> Option<&Commit> {
        self.by_sha.get(sha)
    }

    pub fn len(&self) -> usize {
        self.by_sha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sha.is_empty()
    }

    /// Insert a commit. The first insertion for a sha wins; ancestry pages
    /// never disagree about a commit's parents, so a duplicate is a no-op.
    pub fn insert(&mut self, commit: Commit) {
        self.by_sha.entry(commit.sha.clone()).or_insert(commit);
    }
}

/// Factory for ancestry listings: pages of commits reachable from `start`,
/// strictly in descendant-to-ancestor order.
pub trait CommitHistorySource: Sync {
    fn ancestry(&self, start: &str) -> Box<dyn PageSource<Item = Commit> + Send + '_>;
}
