//! Naming and filtering rules for navigation scans.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Directory that link paths of a nested level are computed against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkBase {
    /// Every link is relative to the scan root (`a/b/c.md` -> `/a/b/c.html`).
    #[default]
    Root,
    /// Each level is relative to its parent directory (`a/b/c.md` -> `/b/c.html`).
    ///
    /// Matches navbars generated by earlier site configurations.
    Parent,
}

impl fmt::Display for LinkBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Parent => f.write_str("parent"),
        }
    }
}

/// Error returned when parsing an unknown [`LinkBase`] name.
#[derive(Debug, thiserror::Error)]
#[error("unknown link base '{0}' (expected 'root' or 'parent')")]
pub struct ParseLinkBaseError(String);

impl FromStr for LinkBase {
    type Err = ParseLinkBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "root" => Ok(Self::Root),
            "parent" => Ok(Self::Parent),
            _ => Err(ParseLinkBaseError(s.to_owned())),
        }
    }
}

/// Rules applied by [`NavTreeBuilder`](crate::NavTreeBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavOptions {
    /// Entries whose name starts with this prefix are skipped (default `.`).
    pub hidden_prefix: String,
    /// Extension of markdown sources, without the dot (default `md`).
    pub source_extension: String,
    /// Extension of rendered pages used in links, without the dot (default `html`).
    pub page_extension: String,
    /// File stem that backs a directory's own page (default `index`).
    pub index_stem: String,
    /// Base directory for link paths of nested levels.
    pub link_base: LinkBase,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            hidden_prefix: ".".to_owned(),
            source_extension: "md".to_owned(),
            page_extension: "html".to_owned(),
            index_stem: "index".to_owned(),
            link_base: LinkBase::Root,
        }
    }
}

impl NavOptions {
    /// Set the link base.
    #[must_use]
    pub fn with_link_base(mut self, link_base: LinkBase) -> Self {
        self.link_base = link_base;
        self
    }

    pub(crate) fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(self.hidden_prefix.as_str())
    }

    pub(crate) fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.source_extension.as_str())
    }
}
