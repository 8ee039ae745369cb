//! Topic index building.
//!
//! Turns top-level navigation groups into [`TopicIndex`] values ready for
//! rendering. Only groups bound to a plain page list are indexed, and the
//! [`EXCLUDED_TOPICS`] never are.

use std::fmt;

use crate::mkdocs::{NavGroup, PageEntry, PageValue};

/// Topics that never get a generated index.
pub const EXCLUDED_TOPICS: [&str; 4] = ["PL", "Others", "Topics", "Roadmap"];

/// Entries whose path contains this are dropped from indexes.
const INDEX_PAGE_MARKER: &str = "index.md";

/// Returns `true` if `topic` is in [`EXCLUDED_TOPICS`].
pub fn is_excluded(topic: &str) -> bool {
    EXCLUDED_TOPICS.contains(&topic)
}

/// A link in a topic index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLink {
    pub title: String,
    /// Link target relative to the topic directory.
    pub path: String,
}

/// Index contents for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicIndex {
    /// Topic name as written in the navigation (original case).
    pub topic: String,
    pub links: Vec<IndexLink>,
}

/// Why a top-level group gets no index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Topic is in [`EXCLUDED_TOPICS`].
    Excluded,
    /// Value is a nested sub-tree.
    Section,
    /// Value is a single page path.
    SinglePage,
    /// Value is null, a boolean or a number.
    NotAList,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded => f.write_str("excluded topic"),
            Self::Section => f.write_str("nested section"),
            Self::SinglePage => f.write_str("single page"),
            Self::NotAList => f.write_str("not a page list"),
        }
    }
}

/// What happens to a top-level group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPlan {
    pub topic: String,
    /// `None` if the topic is indexed.
    pub skip: Option<SkipReason>,
    /// Number of links the index would contain (0 when skipped).
    pub link_count: usize,
}

/// Error building topic indexes.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Page path has no second `/`-separated segment.
    #[error("page {title:?} in topic {topic:?} has path {path:?} with fewer than two segments")]
    PathTooShort {
        topic: String,
        title: String,
        path: String,
    },
}

/// Decide whether a group is indexed.
fn classify(group: &NavGroup) -> Option<SkipReason> {
    if is_excluded(&group.topic) {
        return Some(SkipReason::Excluded);
    }
    match group.value {
        PageValue::Pages(_) => None,
        PageValue::Section(_) => Some(SkipReason::Section),
        PageValue::Page(_) => Some(SkipReason::SinglePage),
        PageValue::Other => Some(SkipReason::NotAList),
    }
}

/// Build indexes for every eligible top-level group, in navigation order.
///
/// An eligible group whose entries are all filtered out still yields an
/// index with no links.
///
/// # Errors
///
/// Returns [`IndexError::PathTooShort`] for the first kept entry whose path
/// has no second segment.
pub fn build_indexes(groups: &[NavGroup]) -> Result<Vec<TopicIndex>, IndexError> {
    let mut indexes = Vec::new();
    for group in groups {
        if let Some(reason) = classify(group) {
            tracing::debug!(topic = %group.topic, %reason, "Skipping topic");
            continue;
        }
        let PageValue::Pages(entries) = &group.value else {
            continue;
        };
        indexes.push(build_index(&group.topic, entries)?);
    }
    Ok(indexes)
}

/// Build the index for a single topic from its page entries.
pub fn build_index(topic: &str, entries: &[PageEntry]) -> Result<TopicIndex, IndexError> {
    let links = entries
        .iter()
        .filter(|entry| {
            let keep = !entry.path.contains(INDEX_PAGE_MARKER);
            if !keep {
                tracing::debug!(topic, path = %entry.path, "Dropping index page entry");
            }
            keep
        })
        .map(|entry| {
            let path = link_target(&entry.path).ok_or_else(|| IndexError::PathTooShort {
                topic: topic.to_owned(),
                title: entry.title.clone(),
                path: entry.path.clone(),
            })?;
            Ok(IndexLink {
                title: entry.title.clone(),
                path: path.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, IndexError>>()?;

    Ok(TopicIndex {
        topic: topic.to_owned(),
        links,
    })
}

/// Report what [`build_indexes`] would do with each top-level group.
pub fn plan_topics(groups: &[NavGroup]) -> Vec<TopicPlan> {
    groups
        .iter()
        .map(|group| {
            let skip = classify(group);
            let link_count = match (&group.value, skip) {
                (PageValue::Pages(entries), None) => entries
                    .iter()
                    .filter(|e| !e.path.contains(INDEX_PAGE_MARKER))
                    .count(),
                _ => 0,
            };
            TopicPlan {
                topic: group.topic.clone(),
                skip,
                link_count,
            }
        })
        .collect()
}

/// Second `/`-separated segment of a page path.
///
/// `foo/ch1.md` becomes `ch1.md`; `a/b/c.md` becomes `b`.
fn link_target(path: &str) -> Option<&str> {
    path.split('/').nth(1)
}
