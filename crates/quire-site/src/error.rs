//! Site generation errors.

use std::io;
use std::path::{Path, PathBuf};

use quire_markdown::MarkdownError;

/// Failure while copying static assets.
#[derive(Debug, thiserror::Error)]
#[error("failed to copy {}: {source}", path.display())]
pub struct CopyError {
    /// Path that could not be read, created or written.
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl CopyError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Failure while generating a single page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        #[source]
        source: MarkdownError,
    },
}

impl PageError {
    /// Source or destination path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Markdown { path, .. } => {
                path
            }
        }
    }
}

/// Failure that aborts a whole site build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Copy(#[from] CopyError),
    #[error("failed to load template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to scan content directory {}: {source}", path.display())]
    Discover {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
