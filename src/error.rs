//! Error types for crier modules using thiserror.

use thiserror::Error;

/// Errors from collaborator page fetches and config loading.
///
/// Any of these aborts the run before the release body is touched; no partial
/// changelog is ever published.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("GitHub API request failed: {0}")]
    Api(#[source] Box<octocrab::Error>),

    #[error("Rate limited by GitHub API: {message}")]
    RateLimited { message: String },

    #[error("Repository not found: {owner}/{repo}")]
    NotFound { owner: String, repo: String },

    #[error("Failed to parse changelog config: {0}")]
    InvalidConfig(#[source] serde_yaml::Error),

    #[error(
        "GitHub authentication failed: no valid auth found. Set the GITHUB_TOKEN or GH_TOKEN environment variable"
    )]
    AuthenticationFailed,
}

/// Errors from boundary resolution and range building.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "Release boundary commit {target} was never reached from its own starting point; \
         the release event and the commit listing disagree"
    )]
    UnresolvedBoundary { target: String },

    #[error(
        "Commit {sha} has {parent_count} parents; only linear history between releases is supported"
    )]
    NonLinearRange { sha: String, parent_count: usize },

    #[error("Commit {sha} was not visited during boundary resolution")]
    MissingCommit { sha: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Top-level error for one release-notes run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
