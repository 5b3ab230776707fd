//! Error types for the content pipeline
//!
//! Only a few failures are real errors here. A missing or malformed
//! navigation reference, an unreadable date or a broken front-matter block
//! are absorbed by defaulting and a `warn!` line instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the catalog, the document store and the resolver
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest or site configuration is malformed
    #[error("Config error: {0}")]
    Config(String),

    /// No document exists for the requested (category, slug)
    #[error("Post not found: {category}/{slug}")]
    PostNotFound { category: String, slug: String },

    /// A category or slug would escape the content root
    #[error("Invalid path segment: {segment:?}")]
    InvalidPath { segment: String },

    /// Unexpected read failure
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the presentation layer should render this as a 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PostNotFound { .. } | Error::InvalidPath { .. })
    }

    /// Short label for log lines
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::PostNotFound { .. } | Error::InvalidPath { .. } => "not_found",
            Error::Io { .. } => "io",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
