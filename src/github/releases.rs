//! Paginated releases listing.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SourceError;
use crate::pagination::PageSource;
use crate::release::Release;

use super::{GitHubRepo, PER_PAGE};

/// One row of `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Deserialize)]
struct ReleaseRecord {
    id: u64,
    tag_name: String,
    target_commitish: String,
    body: Option<String>,
}

/// Page-numbered pager over every release of the repository.
pub struct ReleasePager<'a> {
    repo: &'a GitHubRepo,
    page: Option<u32>,
}

impl<'a> ReleasePager<'a> {
    pub(crate) fn new(repo: &'a GitHubRepo) -> Self {
        Self {
            repo,
            page: Some(1),
        }
    }
}

#[async_trait]
impl PageSource for ReleasePager<'_> {
    type Item = Release;

    async fn next_page(&mut self) -> Result<Option<Vec<Release>>, SourceError> {
        let Some(page_no) = self.page else {
            return Ok(None);
        };

        let route = format!("/repos/{}/{}/releases", self.repo.owner, self.repo.repo);
        let params = [
            ("per_page", PER_PAGE.to_string()),
            ("page", page_no.to_string()),
        ];
        let page = self.repo.fetch_page::<ReleaseRecord>(&route, &params).await?;

        self.page = page.next.is_some().then_some(page_no + 1);

        let releases: Vec<Release> = page
            .items
            .into_iter()
            .map(|record| Release {
                id: record.id,
                tag_name: record.tag_name,
                target_sha: record.target_commitish,
                body: record.body,
            })
            .collect();

        if releases.is_empty() {
            self.page = None;
            return Ok(None);
        }
        Ok(Some(releases))
    }
}
