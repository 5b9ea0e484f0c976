//! Markdown rendering of the classified changes.

use crate::classify::{Changes, PullRequest};

const TITLE: &str = "## Release Notes";
const EMPTY_FALLBACK: &str = "No release notes available for this release.";

/// Render the four buckets as Markdown release notes.
///
/// Empty buckets produce no heading; when every bucket is empty the output is
/// the title followed by a single fallback line.
pub fn render(changes: &Changes) -> String {
    let mut lines = vec![TITLE.to_string()];

    push_section(&mut lines, "Security Updates", &changes.security);
    push_section(&mut lines, "New Features", &changes.features);
    push_section(&mut lines, "Bug Fixes", &changes.bugfixes);
    push_section(&mut lines, "Other Changes", &changes.other);

    if lines.len() == 1 {
        lines.push(EMPTY_FALLBACK.to_string());
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, prs: &[PullRequest]) {
    if prs.is_empty() {
        return;
    }
    lines.push(format!("### {heading}"));
    for pr in prs {
        lines.push(format!("* {} ([#{}]({}))", pr.title, pr.number, pr.url));
    }
}
