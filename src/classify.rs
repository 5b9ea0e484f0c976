//! Bucket the pull requests behind a commit range into changelog sections.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChangelogConfig;
use crate::error::SourceError;
use crate::pagination::{PageFlow, PageSource, walk};

/// A pull request as listed by the pull-request collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// Sha of the commit that landed this PR; `None` until GitHub computes it.
    pub merge_commit_sha: Option<String>,
    /// Set only for PRs that were merged rather than just closed.
    pub merged_at: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
}

/// The four changelog buckets, each in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Changes {
    pub security: Vec<PullRequest>,
    pub features: Vec<PullRequest>,
    pub bugfixes: Vec<PullRequest>,
    pub other: Vec<PullRequest>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.security.is_empty()
            && self.features.is_empty()
            && self.bugfixes.is_empty()
            && self.other.is_empty()
    }
}

/// Drain the closed-PR listing and classify every PR merged inside `range`.
///
/// The ignore-list takes precedence over every section; otherwise the first
/// match in the order security > features > bugfixes wins, and an unlabeled
/// (or unmatched) PR lands in `other`. Each kept PR lands in exactly one
/// bucket.
pub async fn classify<S>(
    pages: &mut S,
    range: &[String],
    config: &ChangelogConfig,
) -> Result<Changes, SourceError>
where
    S: PageSource<Item = PullRequest> + ?Sized,
{
    let in_range: HashSet<&str> = range.iter().map(String::as_str).collect();
    let mut changes = Changes::default();
    let mut seen = 0usize;

    walk(pages, |prs| {
        for pr in prs {
            seen += 1;

            if pr.merged_at.is_none() {
                // Closed without merging; its test-merge sha is meaningless.
                continue;
            }
            let merged_in_range = pr
                .merge_commit_sha
                .as_deref()
                .is_some_and(|sha| in_range.contains(sha));
            if !merged_in_range {
                continue;
            }

            bucket(&mut changes, pr, config);
        }
        PageFlow::Continue
    })
    .await?;

    debug!(
        seen,
        security = changes.security.len(),
        features = changes.features.len(),
        bugfixes = changes.bugfixes.len(),
        other = changes.other.len(),
        "pull requests classified"
    );
    Ok(changes)
}

fn bucket(changes: &mut Changes, pr: PullRequest, config: &ChangelogConfig) {
    let has_label = |name: &str| pr.labels.iter().any(|label| label == name);

    if config.ignored_labels.iter().any(|label| has_label(label)) {
        return;
    }

    if has_label(&config.sections.security) {
        changes.security.push(pr);
    } else if has_label(&config.sections.features) {
        changes.features.push(pr);
    } else if has_label(&config.sections.bugfixes) {
        changes.bugfixes.push(pr);
    } else {
        changes.other.push(pr);
    }
}
