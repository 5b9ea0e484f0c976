//! crier - a GitHub bot that fills in release notes for new releases.
//!
//! # Overview
//!
//! When a release is published, crier finds the commits introduced since the
//! preceding release by walking the paginated commit-history listing, matches
//! the merged PRs behind those commits, buckets them into changelog sections
//! by label, and writes the rendered Markdown into the release body.

pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod history;
pub mod pagination;
pub mod release;
pub mod render;
pub mod run;

// Re-export commonly used types
pub use classify::{Changes, PullRequest, classify};
pub use config::{ChangelogConfig, ConfigSource, Sections};
pub use error::{ResolveError, RunError, SourceError};
pub use github::GitHubRepo;
pub use history::{Boundaries, Commit, CommitCache, CommitHistorySource, build_range, resolve_boundaries};
pub use pagination::{PageFlow, PageSource, walk};
pub use release::{Release, ReleaseIndex, build_release_index};
pub use render::render;
pub use run::{Publisher, ReleaseEvent, handle_release};
