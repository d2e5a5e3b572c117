//! Site manifest assembly for navgen.
//!
//! Combines the static site settings from [`Config`] with the navbar
//! generated from the documentation source directory into a single
//! [`SiteManifest`], serialized as the JSON configuration object handed to
//! the site framework.

use navgen_config::{Config, NavEntry, PluginConfig};
use navgen_tree::{NavError, NavItem, NavTreeBuilder};
use serde::Serialize;

/// Site assembly error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Navigation scan failed.
    #[error(transparent)]
    Nav(#[from] NavError),
    /// Manifest serialization failed.
    #[error("Failed to serialize site manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration object consumed by the site framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub plugins: Vec<PluginConfig>,
    pub theme: ThemeManifest,
    pub markdown: MarkdownManifest,
}

/// Theme section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    /// Heading depth shown in the sidebar.
    pub sidebar_depth: u8,
    /// Static entries followed by the generated tree.
    pub navbar: Vec<NavEntry>,
}

/// Markdown section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownManifest {
    pub headers: HeadersManifest,
}

/// Heading extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadersManifest {
    /// Heading levels extracted into page headers.
    pub level: Vec<u8>,
}

/// Scan the configured source directory and return the generated navbar.
///
/// Static `nav.prepend` entries are not included.
///
/// # Errors
///
/// Returns [`NavError`] if the source directory cannot be scanned.
pub fn generate_navbar(config: &Config) -> Result<Vec<NavItem>, NavError> {
    let builder = NavTreeBuilder::new(config.nav.options());
    builder.build(&config.docs_resolved.source_dir)
}

impl SiteManifest {
    /// Scan the source directory and assemble the full manifest.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Nav`] if the source directory cannot be scanned.
    pub fn assemble(config: &Config) -> Result<Self, SiteError> {
        let generated = generate_navbar(config)?;
        Ok(Self::from_parts(config, generated))
    }

    /// Assemble the manifest from config and an already generated navbar.
    #[must_use]
    pub fn from_parts(config: &Config, generated: Vec<NavItem>) -> Self {
        let mut navbar = config.nav.prepend.clone();
        navbar.extend(generated.into_iter().map(NavEntry::from));
        tracing::debug!(
            static_entries = config.nav.prepend.len(),
            total_entries = navbar.len(),
            "Assembled navbar"
        );

        Self {
            lang: config.site.lang.clone(),
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            plugins: config.plugins.clone(),
            theme: ThemeManifest {
                sidebar_depth: config.theme.sidebar_depth,
                navbar,
            },
            markdown: MarkdownManifest {
                headers: HeadersManifest {
                    level: config.markdown.header_levels.clone(),
                },
            },
        }
    }

    /// Serialize the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
