//! GitHub-backed collaborators using octocrab.
//!
//! Everything here is plain I/O: paginated listings for releases, commit
//! ancestry and pull requests, the config file lookup, and the single
//! release-body update. The algorithmic work lives in the core modules and
//! only sees the collaborator traits.

pub mod auth;
pub mod commits;
pub mod config;
pub mod prs;
pub mod publish;
pub mod releases;
mod retry;

use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RunError, SourceError};
use crate::run::{self, ReleaseEvent};

pub use auth::get_github_token;
pub use commits::AncestryPager;
pub use prs::PullPager;
pub use releases::ReleasePager;

/// Page size for every listing.
pub(crate) const PER_PAGE: &str = "100";

/// One GitHub repository and the client used to talk to it.
pub struct GitHubRepo {
    pub(crate) client: Octocrab,
    pub(crate) owner: String,
    pub(crate) repo: String,
}

impl GitHubRepo {
    pub fn new(client: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Build a repo handle from a personal token.
    pub fn from_token(
        token: &str,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| SourceError::Api(Box::new(e)))?;
        Ok(Self::new(client, owner, repo))
    }

    /// Fresh pager over the repository's releases.
    pub fn releases(&self) -> ReleasePager<'_> {
        ReleasePager::new(self)
    }

    /// Fresh pager over the repository's closed pull requests.
    pub fn pulls(&self) -> PullPager<'_> {
        PullPager::new(self)
    }

    /// Run one full release-notes pass against this repository.
    pub async fn handle_release(&self, event: &ReleaseEvent) -> Result<String, RunError> {
        let mut releases = self.releases();
        let mut pulls = self.pulls();
        run::handle_release(event, &mut releases, self, &mut pulls, self, self).await
    }

    /// Fetch one page of a listing, retrying transient failures.
    pub(crate) async fn fetch_page<T>(
        &self,
        route: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, SourceError>
    where
        T: DeserializeOwned + Send,
    {
        let page: Page<T> = retry::retry_transient(|| self.client.get(route, Some(params)))
            .await
            .map_err(|e| self.map_api_error(e))?;
        debug!(route, items = page.items.len(), "fetched page");
        Ok(page)
    }

    /// Map an octocrab error onto the source-error taxonomy.
    pub(crate) fn map_api_error(&self, err: octocrab::Error) -> SourceError {
        if let octocrab::Error::GitHub { source, .. } = &err {
            let status = source.status_code.as_u16();
            if status == 403 && source.message.to_lowercase().contains("rate limit") {
                return SourceError::RateLimited {
                    message: source.message.clone(),
                };
            }
            if status == 404 {
                return SourceError::NotFound {
                    owner: self.owner.clone(),
                    repo: self.repo.clone(),
                };
            }
        }
        SourceError::Api(Box::new(err))
    }
}
