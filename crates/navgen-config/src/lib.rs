//! Configuration management for navgen.
//!
//! Parses `navgen.toml` with serde and auto-discovers the file in the current
//! directory or its parents. CLI settings can be applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` (errors if unset) and `${VAR:-default}`.
//! Values containing no `${` are taken literally.
//!
//! Expanded fields:
//! - `site.lang`
//! - `site.title`
//! - `site.description`
//! - `docs.source_dir`

mod expand;

use std::path::{Path, PathBuf};

use navgen_tree::{LinkBase, NavItem, NavOptions};
use serde::{Deserialize, Serialize};

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override link base for nested navigation levels.
    pub link_base: Option<LinkBase>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Highest markdown heading level.
const MAX_HEADER_LEVEL: u8 = 6;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings passed through to the framework.
    pub site: SiteConfig,
    /// Documentation source (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Navigation generation rules.
    pub nav: NavConfig,
    /// Theme options.
    pub theme: ThemeConfig,
    /// Markdown options.
    pub markdown: MarkdownConfig,
    /// Registered framework plugins, in order.
    pub plugins: Vec<PluginConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Content language (e.g. `en-US`).
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".to_owned(),
            title: "Docs".to_owned(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory scanned for navigation.
    pub source_dir: PathBuf,
}

/// Navigation generation rules.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Prefix marking entries to skip.
    pub hidden_prefix: String,
    /// Markdown source extension; a leading dot is ignored.
    pub source_extension: String,
    /// Rendered page extension used in links; a leading dot is ignored.
    pub page_extension: String,
    /// File stem backing a directory's own page.
    pub index_stem: String,
    /// Base directory for nested link paths.
    pub link_base: LinkBase,
    /// Static entries placed before the generated navbar.
    pub prepend: Vec<NavEntry>,
}

/// Hand-written navbar entry.
///
/// Unlike a generated [`NavItem`], a static entry may be a dropdown group
/// with children and no link of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Site-relative link target; absent for link-less groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child entries of a dropdown group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavEntry>>,
}

impl NavEntry {
    /// Create a link entry without children.
    #[must_use]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            children: None,
        }
    }

    /// Create a dropdown group without a link.
    #[must_use]
    pub fn group(text: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            children: Some(children),
        }
    }

    /// Require a non-empty label plus an absolute link or non-empty children.
    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        require_non_empty(&self.text, &format!("{field}.text"))?;

        if let Some(link) = &self.link
            && !link.starts_with('/')
        {
            return Err(ConfigError::Validation(format!(
                "{field}.link must start with '/'"
            )));
        }

        let children = self.children.as_deref().unwrap_or_default();
        if self.link.is_none() && children.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field} needs a link or non-empty children"
            )));
        }
        for (i, child) in children.iter().enumerate() {
            child.validate(&format!("{field}.children[{i}]"))?;
        }
        Ok(())
    }
}

impl From<NavItem> for NavEntry {
    fn from(item: NavItem) -> Self {
        Self {
            text: item.text,
            link: Some(item.link),
            children: item
                .children
                .map(|children| children.into_iter().map(Self::from).collect()),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        let options = NavOptions::default();
        Self {
            hidden_prefix: options.hidden_prefix,
            source_extension: options.source_extension,
            page_extension: options.page_extension,
            index_stem: options.index_stem,
            link_base: options.link_base,
            prepend: vec![NavEntry::link("Home", "/")],
        }
    }
}

impl NavConfig {
    /// Builder options for these rules.
    #[must_use]
    pub fn options(&self) -> NavOptions {
        NavOptions {
            hidden_prefix: self.hidden_prefix.clone(),
            source_extension: strip_dot(&self.source_extension).to_owned(),
            page_extension: strip_dot(&self.page_extension).to_owned(),
            index_stem: self.index_stem.clone(),
            link_base: self.link_base,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.hidden_prefix, "nav.hidden_prefix")?;
        require_name(strip_dot(&self.source_extension), "nav.source_extension")?;
        require_name(strip_dot(&self.page_extension), "nav.page_extension")?;
        require_name(&self.index_stem, "nav.index_stem")?;

        for (i, entry) in self.prepend.iter().enumerate() {
            entry.validate(&format!("nav.prepend[{i}]"))?;
        }
        Ok(())
    }
}

/// Theme options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Heading depth shown in the sidebar.
    pub sidebar_depth: u8,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { sidebar_depth: 4 }
    }
}

/// Markdown options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Heading levels extracted into page headers.
    pub header_levels: Vec<u8>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            header_levels: vec![2, 3, 4],
        }
    }
}

/// Framework plugin registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin name (e.g. `search`).
    pub name: String,
    /// Plugin options, passed through untouched.
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub options: toml::Table,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

fn strip_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a single path segment: non-empty, no separators.
fn require_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain path separators"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `navgen.toml` in the current directory and parents, falling back
    /// to defaults. CLI settings take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(link_base) = settings.link_base {
            self.nav.link_base = link_base;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            nav: NavConfig::default(),
            theme: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            plugins: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.lang, "site.lang")?;
        require_non_empty(&self.site.title, "site.title")?;
        self.nav.validate()?;
        self.validate_markdown()?;
        for (i, plugin) in self.plugins.iter().enumerate() {
            require_non_empty(&plugin.name, &format!("plugins[{i}].name"))?;
        }
        Ok(())
    }

    fn validate_markdown(&self) -> Result<(), ConfigError> {
        let levels = &self.markdown.header_levels;
        if levels.is_empty() {
            return Err(ConfigError::Validation(
                "markdown.header_levels cannot be empty".to_owned(),
            ));
        }
        if let Some(level) = levels
            .iter()
            .find(|level| !(1..=MAX_HEADER_LEVEL).contains(*level))
        {
            return Err(ConfigError::Validation(format!(
                "markdown.header_levels must be between 1 and {MAX_HEADER_LEVEL}, got {level}"
            )));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.lang = expand::expand_env(&self.site.lang, "site.lang")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.description = expand::expand_env(&self.site.description, "site.description")?;

        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}
