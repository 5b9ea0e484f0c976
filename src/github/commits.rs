//! Paginated commit-ancestry listing.
//!
//! `GET /repos/{owner}/{repo}/commits?sha=<start>` lists commits reachable
//! from `start` in descendant-to-ancestor order, which is exactly the order
//! the boundary resolver consumes.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SourceError;
use crate::history::{Commit, CommitHistorySource};
use crate::pagination::PageSource;

use super::{GitHubRepo, PER_PAGE};

/// One row of the commits listing. Only sha and parent shas matter here.
#[derive(Debug, Deserialize)]
struct CommitRecord {
    sha: String,
    #[serde(default)]
    parents: Vec<ParentRef>,
}

#[derive(Debug, Deserialize)]
struct ParentRef {
    sha: String,
}

/// Page-numbered pager over the ancestry of one starting commit.
pub struct AncestryPager<'a> {
    repo: &'a GitHubRepo,
    start: String,
    page: Option<u32>,
}

impl<'a> AncestryPager<'a> {
    pub(crate) fn new(repo: &'a GitHubRepo, start: &str) -> Self {
        Self {
            repo,
            start: start.to_string(),
            page: Some(1),
        }
    }
}

#[async_trait]
impl PageSource for AncestryPager<'_> {
    type Item = Commit;

    async fn next_page(&mut self) -> Result<Option<Vec<Commit>>, SourceError> {
        let Some(page_no) = self.page else {
            return Ok(None);
        };

        let route = format!("/repos/{}/{}/commits", self.repo.owner, self.repo.repo);
        let params = [
            ("sha", self.start.clone()),
            ("per_page", PER_PAGE.to_string()),
            ("page", page_no.to_string()),
        ];
        let page = self.repo.fetch_page::<CommitRecord>(&route, &params).await?;

        self.page = page.next.is_some().then_some(page_no + 1);

        let commits: Vec<Commit> = page
            .items
            .into_iter()
            .map(|record| Commit {
                sha: record.sha,
                parent_shas: record.parents.into_iter().map(|p| p.sha).collect(),
            })
            .collect();

        if commits.is_empty() {
            self.page = None;
            return Ok(None);
        }
        Ok(Some(commits))
    }
}

impl CommitHistorySource for GitHubRepo {
    fn ancestry(&self, start: &str) -> Box<dyn PageSource<Item = Commit> + Send + '_> {
        Box::new(AncestryPager::new(self, start))
    }
}
