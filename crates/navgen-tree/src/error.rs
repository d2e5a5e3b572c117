//! Navigation scan errors.

use std::path::{Path, PathBuf};

/// Filesystem failure during a navigation scan.
///
/// Every variant carries the path that failed and the underlying I/O error.
/// The scan aborts on the first failure; no partial tree is returned.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An entry of a directory listing could not be read.
    #[error("Failed to read entry in {}: {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Status check of an entry failed.
    #[error("Failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NavError {
    /// Path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::ReadEntry { path, .. } | Self::Stat { path, .. } => {
                path
            }
        }
    }

    /// Kind of the underlying I/O error.
    #[must_use]
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::ReadDir { source, .. }
            | Self::ReadEntry { source, .. }
            | Self::Stat { source, .. } => source.kind(),
        }
    }
}
