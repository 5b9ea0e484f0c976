//! Paginated closed pull-request listing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::classify::PullRequest;
use crate::error::SourceError;
use crate::pagination::PageSource;

use super::{GitHubRepo, PER_PAGE};

/// One row of `GET /repos/{owner}/{repo}/pulls?state=closed`.
#[derive(Debug, Deserialize)]
struct PullRecord {
    number: u64,
    title: Option<String>,
    html_url: String,
    merge_commit_sha: Option<String>,
    merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    labels: Vec<LabelRecord>,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    name: String,
}

/// Page-numbered pager over every closed pull request of the repository.
pub struct PullPager<'a> {
    repo: &'a GitHubRepo,
    page: Option<u32>,
}

impl<'a> PullPager<'a> {
    pub(crate) fn new(repo: &'a GitHubRepo) -> Self {
        Self {
            repo,
            page: Some(1),
        }
    }
}

#[async_trait]
impl PageSource for PullPager<'_> {
    type Item = PullRequest;

    async fn next_page(&mut self) -> Result<Option<Vec<PullRequest>>, SourceError> {
        let Some(page_no) = self.page else {
            return Ok(None);
        };

        let route = format!("/repos/{}/{}/pulls", self.repo.owner, self.repo.repo);
        let params = [
            ("state", "closed".to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("page", page_no.to_string()),
        ];
        let page = self.repo.fetch_page::<PullRecord>(&route, &params).await?;

        self.page = page.next.is_some().then_some(page_no + 1);

        let prs: Vec<PullRequest> = page
            .items
            .into_iter()
            .map(|record| PullRequest {
                number: record.number,
                title: record.title.unwrap_or_default(),
                url: record.html_url,
                merge_commit_sha: record.merge_commit_sha,
                merged_at: record.merged_at,
                labels: record.labels.into_iter().map(|l| l.name).collect(),
            })
            .collect();

        if prs.is_empty() {
            self.page = None;
            return Ok(None);
        }
        Ok(Some(prs))
    }
}
