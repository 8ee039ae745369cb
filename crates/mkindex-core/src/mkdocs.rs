//! `mkdocs.yml` navigation loading.
//!
//! The navigation tree is parsed with `serde_yaml` into untyped values first
//! and then converted into [`NavTree`], so every group value ends up as an
//! explicit [`PageValue`] variant instead of being shape-checked later.
//!
//! ```yaml
//! pages:
//!   - Home: index.md            # PageValue::Page
//!   - Foo:                      # PageValue::Pages
//!       - Ch1: foo/ch1.md
//!       - Intro: foo/index.md
//!   - Topics:                   # PageValue::Section
//!       - Bar:
//!           - Ch1: topics/bar/ch1.md
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Ordered sequence of navigation groups.
pub type NavTree = Vec<NavGroup>;

/// Parsed `mkdocs.yml`, reduced to the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkDocs {
    /// Top-level navigation groups in document order.
    pub pages: NavTree,
}

/// A single-key navigation mapping: topic name and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub topic: String,
    pub value: PageValue,
}

/// Shape of a navigation group's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageValue {
    /// Plain ordered list of `title: path` entries.
    Pages(Vec<PageEntry>),
    /// Nested sub-tree.
    Section(NavTree),
    /// A single page path bound directly to the topic.
    Page(String),
    /// Null, boolean or number.
    Other,
}

/// A `title: path` navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub title: String,
    pub path: String,
}

/// Error loading `mkdocs.yml`.
#[derive(Debug, thiserror::Error)]
pub enum MkDocsError {
    /// File not found.
    #[error("mkdocs configuration not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Neither `pages` nor `nav` is present.
    #[error("mkdocs configuration has no `pages` or `nav` key")]
    MissingPages,
    /// A top-level group is not a single-key mapping.
    #[error("invalid navigation group: {0}")]
    InvalidGroup(String),
}

/// Top-level keys we care about. Everything else in `mkdocs.yml` is ignored.
#[derive(Deserialize)]
struct MkDocsRaw {
    pages: Option<Vec<Value>>,
    /// `pages` was renamed to `nav` in mkdocs 1.0.
    nav: Option<Vec<Value>>,
}

/// Read and parse an `mkdocs.yml` file.
pub fn load_mkdocs(path: &Path) -> Result<MkDocs, MkDocsError> {
    if !path.exists() {
        return Err(MkDocsError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_mkdocs(&content)
}

/// Parse `mkdocs.yml` content.
///
/// `pages` takes precedence over `nav` when both are present.
pub fn parse_mkdocs(content: &str) -> Result<MkDocs, MkDocsError> {
    let raw: MkDocsRaw = serde_yaml::from_str(content)?;
    let items = raw.pages.or(raw.nav).ok_or(MkDocsError::MissingPages)?;
    Ok(MkDocs {
        pages: items
            .into_iter()
            .map(parse_group)
            .collect::<Result<_, _>>()?,
    })
}

/// Parse a `topic: value` group. Only the group's own shape is checked;
/// its value never fails to parse.
fn parse_group(item: Value) -> Result<NavGroup, MkDocsError> {
    let invalid = MkDocsError::InvalidGroup;

    let mapping = match item {
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(invalid(format!(
                "expected a single-key mapping, found {}",
                kind(&other)
            )));
        }
    };
    if mapping.len() != 1 {
        return Err(invalid(format!(
            "expected a single-key mapping, found {} keys",
            mapping.len()
        )));
    }
    let Some((key, value)) = mapping.into_iter().next() else {
        return Err(invalid("empty mapping".to_owned()));
    };
    let topic = scalar_text(&key)
        .ok_or_else(|| invalid(format!("topic must be a scalar, found {}", kind(&key))))?;
    let value = parse_value(&topic, value);

    Ok(NavGroup { topic, value })
}

fn parse_value(topic: &str, value: Value) -> PageValue {
    match value {
        Value::String(path) => PageValue::Page(path),
        Value::Sequence(items) => {
            if let Some(entries) = items.iter().map(page_entry).collect::<Option<Vec<_>>>() {
                PageValue::Pages(entries)
            } else {
                PageValue::Section(parse_section(topic, items))
            }
        }
        Value::Mapping(mapping) => {
            // A mapping value is a sub-tree with one group per key.
            let items = mapping
                .into_iter()
                .map(|(key, value)| {
                    let mut single = Mapping::new();
                    single.insert(key, value);
                    Value::Mapping(single)
                })
                .collect();
            PageValue::Section(parse_section(topic, items))
        }
        Value::Tagged(tagged) => parse_value(topic, tagged.value),
        Value::Null | Value::Bool(_) | Value::Number(_) => PageValue::Other,
    }
}

/// Parse a nested sub-tree. Sections are never indexed, so items that are
/// not `topic: value` groups are dropped instead of failing the load.
fn parse_section(topic: &str, items: Vec<Value>) -> NavTree {
    items
        .into_iter()
        .filter_map(|item| match parse_group(item) {
            Ok(group) => Some(group),
            Err(e) => {
                tracing::debug!(topic, error = %e, "Dropping malformed section item");
                None
            }
        })
        .collect()
}

/// Returns the entry if `item` is a single-key mapping with a string path.
fn page_entry(item: &Value) -> Option<PageEntry> {
    let mapping = item.as_mapping()?;
    if mapping.len() != 1 {
        return None;
    }
    let (key, value) = mapping.iter().next()?;
    Some(PageEntry {
        title: scalar_text(key)?,
        path: value.as_str()?.to_owned(),
    })
}

/// Render a scalar key as text. YAML allows `2019: ...` or `true: ...` as keys.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
