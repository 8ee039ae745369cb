//! Error types for index generation.

use crate::index::IndexError;
use crate::mkdocs::MkDocsError;
use crate::writer::WriteError;

/// Error from [`generate`](crate::generate).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading `mkdocs.yml` failed.
    #[error("{0}")]
    MkDocs(#[from] MkDocsError),

    /// Building an index failed.
    #[error("{0}")]
    Index(#[from] IndexError),

    /// Writing an index document failed.
    #[error("{0}")]
    Write(#[from] WriteError),
}
