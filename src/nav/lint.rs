//! Data-quality checks for navigation trees
//!
//! Rendering never consults these findings. They exist so the site owner can
//! catch key collisions and empty sections before publishing.

use super::model::{NavEntry, NavTree};
use std::collections::HashSet;
use std::fmt;

/// What is wrong with an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Two siblings share a title, so their rendering keys collide
    DuplicateTitle,
    /// Group with no children
    EmptyGroup,
    /// Entry whose title is empty or whitespace
    EmptyTitle,
    /// Link whose url is empty
    EmptyUrl,
}

/// A single lint observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    /// Titles of the enclosing groups, outermost first
    pub path: Vec<String>,
    pub title: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.path.join(" > ")
        };
        let what = match self.kind {
            FindingKind::DuplicateTitle => "duplicate sibling title",
            FindingKind::EmptyGroup => "group has no children",
            FindingKind::EmptyTitle => "entry has an empty title",
            FindingKind::EmptyUrl => "link has an empty url",
        };
        write!(f, "{}: {} ({:?})", location, what, self.title)
    }
}

/// Walk the tree and collect findings in document order
pub fn lint(tree: &NavTree) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut path = Vec::new();
    lint_level(tree, &mut path, &mut findings);
    findings
}

fn lint_level(tree: &NavTree, path: &mut Vec<String>, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();

    for entry in tree {
        let title = entry.title();
        let mut report = |kind| {
            findings.push(Finding {
                kind,
                path: path.clone(),
                title: title.to_string(),
            })
        };

        if title.trim().is_empty() {
            report(FindingKind::EmptyTitle);
        }
        if !seen.insert(title) {
            report(FindingKind::DuplicateTitle);
        }

        match entry {
            NavEntry::Link { url, .. } => {
                if url.is_empty() {
                    report(FindingKind::EmptyUrl);
                }
            }
            NavEntry::Group { children, .. } => {
                if children.is_empty() {
                    report(FindingKind::EmptyGroup);
                }
                path.push(title.to_string());
                lint_level(children, path, findings);
                path.pop();
            }
        }
    }
}
