//! CLI error types.

use std::path::PathBuf;

use navgen_config::ConfigError;
use navgen_site::SiteError;
use navgen_tree::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("Failed to serialize navbar: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
