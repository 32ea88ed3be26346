//! Navigation tree data model
//!
//! A [`NavTree`] is an ordered list of [`NavEntry`] values. Each entry is
//! either a leaf link or a titled group holding a nested tree. The tree is
//! assumed acyclic: it comes from static site configuration, and ownership
//! of `children` makes cycles unrepresentable anyway.
//!
//! On disk the tree keeps the compact triple form used by site configs:
//!
//! ```json
//! [
//!   ["Intro", "/intro", null],
//!   ["Guides", [["Setup", "/guides/setup", null]], "/icons/guides.svg"]
//! ]
//! ```
//!
//! The second slot is a URL for links and a nested array for groups. The
//! third slot is optional and only meaningful for groups.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum NavEntry {
    /// Clickable leaf with a destination
    Link { title: String, url: String },
    /// Non-clickable header over a nested tree
    Group {
        title: String,
        children: NavTree,
        icon: Option<String>,
    },
}

impl NavEntry {
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        NavEntry::Link {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn group(title: impl Into<String>, children: impl Into<NavTree>) -> Self {
        NavEntry::Group {
            title: title.into(),
            children: children.into(),
            icon: None,
        }
    }

    /// Attach an icon to a group. Links carry no icon, so this is a no-op for them.
    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        match self {
            NavEntry::Group {
                title, children, ..
            } => NavEntry::Group {
                title,
                children,
                icon: Some(icon.into()),
            },
            link => link,
        }
    }

    /// Title shown for the entry; also its rendering key among siblings
    pub fn title(&self) -> &str {
        match self {
            NavEntry::Link { title, .. } | NavEntry::Group { title, .. } => title,
        }
    }
}

/// Ordered sequence of entries; order is rendering order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree(Vec<NavEntry>);

impl NavTree {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deepest nesting level. An empty tree has depth 0, a flat list depth 1.
    pub fn depth(&self) -> usize {
        self.0
            .iter()
            .map(|entry| match entry {
                NavEntry::Link { .. } => 1,
                NavEntry::Group { children, .. } => 1 + children.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Total number of entries at every level
    pub fn count(&self) -> usize {
        self.0
            .iter()
            .map(|entry| match entry {
                NavEntry::Link { .. } => 1,
                NavEntry::Group { children, .. } => 1 + children.count(),
            })
            .sum()
    }
}

impl From<Vec<NavEntry>> for NavTree {
    fn from(entries: Vec<NavEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a NavTree {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Positional wire form: `[title, urlOrChildren, icon?]`
#[derive(Deserialize)]
struct RawEntry(String, RawTarget, #[serde(default)] Option<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Url(String),
    Children(NavTree),
}

impl From<RawEntry> for NavEntry {
    fn from(RawEntry(title, target, icon): RawEntry) -> Self {
        match target {
            RawTarget::Url(url) => NavEntry::Link { title, url },
            RawTarget::Children(children) => NavEntry::Group {
                title,
                children,
                icon,
            },
        }
    }
}

impl Serialize for NavEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        match self {
            NavEntry::Link { title, url } => {
                tuple.serialize_element(title)?;
                tuple.serialize_element(url)?;
                tuple.serialize_element(&Option::<String>::None)?;
            }
            NavEntry::Group {
                title,
                children,
                icon,
            } => {
                tuple.serialize_element(title)?;
                tuple.serialize_element(children)?;
                tuple.serialize_element(icon)?;
            }
        }
        tuple.end()
    }
}
