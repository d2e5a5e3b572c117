//! CLI command implementations.

pub(crate) mod manifest;
pub(crate) mod nav;

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};
use navgen_tree::LinkBase;

pub(crate) use manifest::ManifestArgs;
pub(crate) use nav::NavArgs;

use crate::error::CliError;
use crate::output::Output;

/// Arguments shared by all generating commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Base for nested link paths: root or parent (overrides config).
    #[arg(long)]
    link_base: Option<LinkBase>,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (config and scan summary logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load config with CLI overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            link_base: self.link_base,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Write generated JSON to the output file or stdout.
    fn emit(&self, json: &str, output: &Output) -> Result<(), CliError> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n")).map_err(|source| CliError::Write {
                    path: path.clone(),
                    source,
                })?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.content(json)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;

    use super::{ManifestArgs, NavArgs};

    #[derive(Parser)]
    struct NavCli {
        #[command(flatten)]
        args: NavArgs,
    }

    #[derive(Parser)]
    struct ManifestCli {
        #[command(flatten)]
        args: ManifestArgs,
    }

    fn argv<'a>(args: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
        std::iter::once("navgen").chain(args.iter().copied())
    }

    pub(crate) fn try_parse_nav(args: &[&str]) -> Result<NavArgs, clap::Error> {
        NavCli::try_parse_from(argv(args)).map(|cli| cli.args)
    }

    pub(crate) fn parse_nav(args: &[&str]) -> NavArgs {
        try_parse_nav(args).unwrap()
    }

    pub(crate) fn parse_manifest(args: &[&str]) -> ManifestArgs {
        ManifestCli::try_parse_from(argv(args)).unwrap().args
    }

    /// Create a docs tree plus a `navgen.toml` pointing at it.
    pub(crate) fn fixture() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        for rel in ["index.md", "d.md", "a/index.md", "a/b/c.md", ".vuepress/config.md"] {
            let path = docs.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "# Page").unwrap();
        }
        fs::write(
            temp_dir.path().join("navgen.toml"),
            "[site]\ntitle = \"Notes\"\n\n[[plugins]]\nname = \"search\"\n",
        )
        .unwrap();
        temp_dir
    }

    pub(crate) fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }
}
