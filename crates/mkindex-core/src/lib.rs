//! Per-topic index page generation for mkdocs sites.
//!
//! Reads the navigation from `mkdocs.yml` and writes a markdown index listing
//! the pages of each top-level topic.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use mkindex_core::{GenerateOptions, generate};
//!
//! let report = generate(&GenerateOptions {
//!     mkdocs_path: PathBuf::from("mkdocs.yml"),
//!     docs_dir: PathBuf::from("docs"),
//!     dry_run: false,
//! })?;
//! assert!(report.written.iter().all(|p| p.ends_with("index.md")));
//! # Ok(())
//! # }
//! ```

mod error;
mod generator;
pub mod index;
pub mod mkdocs;
pub mod writer;

pub use error::Error;
pub use generator::{GenerateOptions, GenerateReport, generate, plan};
pub use index::{
    EXCLUDED_TOPICS, IndexError, IndexLink, SkipReason, TopicIndex, TopicPlan, build_indexes,
};
pub use mkdocs::{MkDocs, MkDocsError, NavGroup, NavTree, PageEntry, PageValue, load_mkdocs};
pub use writer::{IndexWriter, WriteError, render_index};
