//! Paginated walk driver shared by every multi-page listing.
//!
//! Every collaborator listing (releases, commit ancestry, pull requests) is
//! exposed as a [`PageSource`]: a lazy, finite, non-restartable sequence of
//! pages. [`walk`] pulls pages one at a time and hands each to a handler; the
//! handler signals early termination by returning [`PageFlow::Stop`], and no
//! page is ever fetched after a stop.

use async_trait::async_trait;

use crate::error::SourceError;

/// Handler verdict after inspecting one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFlow {
    /// Fetch the next page, if one exists.
    Continue,
    /// Terminate the walk; no further pages are fetched.
    Stop,
}

/// A paged data source yielding batches of items in a fixed order.
///
/// `next_page` returns `Ok(None)` once the listing is exhausted. Sources are
/// not restartable; a fresh walk needs a fresh source.
#[async_trait]
pub trait PageSource: Send {
    type Item: Send;

    async fn next_page(&mut self) -> Result<Option<Vec<Self::Item>>, SourceError>;
}

/// Pull pages from `pages` until exhaustion or until `on_page` stops the walk.
///
/// The stop decision depends on the page contents, so pagination is strictly
/// sequential; there is no fan-out across pages.
pub async fn walk<S, F>(pages: &mut S, mut on_page: F) -> Result<(), SourceError>
where
    S: PageSource + ?Sized,
    F: FnMut(Vec<S::Item>) -> PageFlow + Send,
{
    while let Some(items) = pages.next_page().await? {
        if on_page(items) == PageFlow::Stop {
            return Ok(());
        }
    }
    Ok(())
}
