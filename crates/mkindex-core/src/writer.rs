//! Index document rendering and writing.
//!
//! Each [`TopicIndex`] becomes `<docs_dir>/<topic lower-cased>/index.md`:
//!
//! ```text
//! ### **Foo**
//!
//! * [Ch1](ch1.md)
//! * [Ch2](ch2.md)
//! ```
//!
//! The document has no trailing newline. Topic directories are never created
//! here; they belong to the documentation tree.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::index::{IndexLink, TopicIndex};

/// Filename of generated index documents.
pub const INDEX_FILENAME: &str = "index.md";

/// Error writing an index document.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Topic directory does not exist.
    #[error("Topic directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    /// I/O error writing the document.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the markdown document for a topic index.
pub fn render_index(index: &TopicIndex) -> String {
    let heading = format!("### **{}**", index.topic);
    let links = index
        .links
        .iter()
        .map(render_link)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{heading}\n\n{links}")
}

fn render_link(link: &IndexLink) -> String {
    format!("* [{}]({})", link.title, link.path)
}

/// Writes index documents under a docs root.
#[derive(Debug, Clone)]
pub struct IndexWriter {
    docs_dir: PathBuf,
}

impl IndexWriter {
    /// Create a writer rooted at `docs_dir`.
    #[must_use]
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    /// Destination path for `topic`'s index document.
    pub fn destination(&self, topic: &str) -> PathBuf {
        self.docs_dir
            .join(topic.to_lowercase())
            .join(INDEX_FILENAME)
    }

    /// Render and write `index`, replacing any existing document.
    ///
    /// Returns the path written.
    pub fn write(&self, index: &TopicIndex) -> Result<PathBuf, WriteError> {
        let path = self.destination(&index.topic);
        if let Some(dir) = path.parent()
            && !dir.is_dir()
        {
            return Err(WriteError::MissingDirectory(dir.to_path_buf()));
        }

        fs::write(&path, render_index(index)).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            topic = %index.topic,
            path = %path.display(),
            links = index.links.len(),
            "Wrote topic index"
        );
        Ok(path)
    }
}
