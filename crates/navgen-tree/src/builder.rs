//! Recursive navigation scan.
//!
//! Each directory level lists its entries, then fans the status checks and
//! sub-scans out over the rayon pool. Results are collected by position, so
//! the produced siblings keep the directory-listing order no matter which
//! check finishes first. No sorting is applied.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::NavError;
use crate::item::NavItem;
use crate::options::{LinkBase, NavOptions};

/// Derives a navbar tree from a documentation source directory.
#[derive(Debug, Clone, Default)]
pub struct NavTreeBuilder {
    options: NavOptions,
}

impl NavTreeBuilder {
    /// Create a builder with the given rules.
    #[must_use]
    pub fn new(options: NavOptions) -> Self {
        Self { options }
    }

    /// Scan `root` and return its navigation entries in listing order.
    ///
    /// Reads the filesystem only. Each call re-scans the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if `root` or any directory below it cannot be
    /// listed, or if an entry cannot be stat'ed.
    pub fn build(&self, root: &Path) -> Result<Vec<NavItem>, NavError> {
        let items = self.scan_dir(root, root)?;
        tracing::info!(
            root = %root.display(),
            entries = items.len(),
            link_base = %self.options.link_base,
            "Generated navigation"
        );
        Ok(items)
    }

    /// Scan one directory level, computing links against `base`.
    fn scan_dir(&self, dir: &Path, base: &Path) -> Result<Vec<NavItem>, NavError> {
        let names = list_dir(dir)?;
        tracing::debug!(dir = %dir.display(), entries = names.len(), "Scanning directory");

        let child_base = match self.options.link_base {
            LinkBase::Root => base,
            LinkBase::Parent => dir,
        };

        let items: Vec<Option<NavItem>> = names
            .par_iter()
            .map(|name| self.scan_entry(dir, name, base, child_base))
            .collect::<Result<_, _>>()?;

        Ok(items.into_iter().flatten().collect())
    }

    /// Classify a single entry of `dir`.
    ///
    /// Returns `Ok(None)` for entries that produce no navigation item.
    fn scan_entry(
        &self,
        dir: &Path,
        name: &OsStr,
        base: &Path,
        child_base: &Path,
    ) -> Result<Option<NavItem>, NavError> {
        let name_str = name.to_string_lossy();
        if self.options.is_hidden(&name_str) {
            return Ok(None);
        }

        let path = dir.join(name);
        let metadata = fs::symlink_metadata(&path).map_err(|source| NavError::Stat {
            path: path.clone(),
            source,
        })?;

        if metadata.is_dir() {
            let children = self.scan_dir(&path, child_base)?;
            if children.is_empty() {
                tracing::debug!(dir = %path.display(), "Skipping section without pages");
                return Ok(None);
            }
            let link = format!("/{}/", relative_url(&path, base));
            return Ok(Some(NavItem::section(name_str, link, children)));
        }

        Ok(self.page_item(&path, dir, base))
    }

    /// Build a page entry for a markdown source, if it is eligible.
    fn page_item(&self, path: &Path, dir: &Path, base: &Path) -> Option<NavItem> {
        if !self.options.is_source(path) {
            return None;
        }
        let stem = path.file_stem()?.to_string_lossy();
        if stem == self.options.index_stem.as_str() {
            return None;
        }

        let page = format!("{stem}.{}", self.options.page_extension);
        let dir_url = relative_url(dir, base);
        let link = if dir_url.is_empty() {
            format!("/{page}")
        } else {
            format!("/{dir_url}/{page}")
        };
        Some(NavItem::page(stem, link))
    }
}

/// List entry names of `dir` in the order the filesystem returns them.
fn list_dir(dir: &Path) -> Result<Vec<OsString>, NavError> {
    let entries = fs::read_dir(dir).map_err(|source| NavError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    entries
        .map(|entry| {
            entry
                .map(|e| e.file_name())
                .map_err(|source| NavError::ReadEntry {
                    path: dir.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// Path of `path` relative to `base`, joined with `/`.
///
/// Returns an empty string when both are the same directory.
fn relative_url(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
