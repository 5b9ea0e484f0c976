//! Shared in-memory fakes for the collaborator traits.
//!
//! Not every helper is used by every test file.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use crier::classify::PullRequest;
use crier::error::SourceError;
use crier::history::{Commit, CommitHistorySource};
use crier::pagination::PageSource;
use crier::release::Release;
use crier::run::Publisher;
use crier::{ChangelogConfig, ConfigSource};

/// Pre-canned pages served in order, counting how many were actually read.
pub struct FakePages<T> {
    pages: VecDeque<Vec<T>>,
    reads: Arc<AtomicUsize>,
    fail: Option<SourceError>,
}

impl<T> FakePages<T> {
    pub fn new(pages: Vec<Vec<T>>) -> Self {
        Self::with_counter(pages, Arc::new(AtomicUsize::new(0)))
    }

    pub fn with_counter(pages: Vec<Vec<T>>, reads: Arc<AtomicUsize>) -> Self {
        Self {
            pages: pages.into(),
            reads,
            fail: None,
        }
    }

    /// Fail the next page fetch instead of serving it.
    pub fn failing(error: SourceError) -> Self {
        Self {
            pages: VecDeque::new(),
            reads: Arc::new(AtomicUsize::new(0)),
            fail: Some(error),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Send> PageSource for FakePages<T> {
    type Item = T;

    async fn next_page(&mut self) -> Result<Option<Vec<T>>, SourceError> {
        if let Some(err) = self.fail.take() {
            return Err(err);
        }
        let page = self.pages.pop_front();
        if page.is_some() {
            self.reads.fetch_add(1, Ordering::SeqCst);
        }
        Ok(page)
    }
}

/// Ancestry listings keyed by starting sha, sharing one read counter.
#[derive(Default)]
pub struct FakeHistory {
    ancestries: HashMap<String, Vec<Vec<Commit>>>,
    reads: Arc<AtomicUsize>,
}

impl FakeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ancestry(mut self, start: &str, pages: Vec<Vec<Commit>>) -> Self {
        self.ancestries.insert(start.to_string(), pages);
        self
    }

    /// Pages served across every walk so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl CommitHistorySource for FakeHistory {
    fn ancestry(&self, start: &str) -> Box<dyn PageSource<Item = Commit> + Send + '_> {
        let pages = self.ancestries.get(start).cloned().unwrap_or_default();
        Box::new(FakePages::with_counter(pages, self.reads.clone()))
    }
}

/// Config source returning a fixed config.
pub struct FixedConfig(pub ChangelogConfig);

#[async_trait]
impl ConfigSource for FixedConfig {
    async fn load(&self) -> Result<ChangelogConfig, SourceError> {
        Ok(self.0.clone())
    }
}

/// Publisher that records every call; optionally fails.
#[derive(Default)]
pub struct RecordingPublisher {
    pub calls: Mutex<Vec<(u64, String, String)>>,
    pub fail: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(u64, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(
        &self,
        release_id: u64,
        tag_name: &str,
        body: &str,
    ) -> Result<(), SourceError> {
        if self.fail {
            return Err(SourceError::RateLimited {
                message: "publish rejected".to_string(),
            });
        }
        self.calls
            .lock()
            .unwrap()
            .push((release_id, tag_name.to_string(), body.to_string()));
        Ok(())
    }
}

pub fn commit(sha: &str, parents: &[&str]) -> Commit {
    Commit {
        sha: sha.to_string(),
        parent_shas: parents.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn release(id: u64, tag: &str, sha: &str) -> Release {
    Release {
        id,
        tag_name: tag.to_string(),
        target_sha: sha.to_string(),
        body: None,
    }
}

pub fn merged_pr(number: u64, title: &str, merge_sha: &str, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        url: format!("https://github.com/owner/repo/pull/{number}"),
        merge_commit_sha: Some(merge_sha.to_string()),
        merged_at: Some(Utc::now()),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

/// A linear chain of single-parent commits, newest first.
///
/// `chain(&["c5", "c4", "c3"])` yields c5→c4→c3 with c3 as root.
pub fn chain(shas: &[&str]) -> Vec<Commit> {
    shas.iter()
        .enumerate()
        .map(|(i, sha)| {
            let parents: Vec<&str> = shas.get(i + 1).map(|p| vec![*p]).unwrap_or_default();
            commit(sha, &parents)
        })
        .collect()
}
