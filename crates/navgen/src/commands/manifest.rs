//! `navgen manifest` command implementation.

use clap::Args;
use navgen_site::SiteManifest;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the manifest command.
#[derive(Args)]
pub(crate) struct ManifestArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl ManifestArgs {
    /// Execute the manifest command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source directory cannot
    /// be scanned, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        if let Some(path) = &config.config_path {
            tracing::info!(config = %path.display(), "Loaded configuration");
        }

        let manifest = SiteManifest::assemble(&config)?;
        let json = manifest.to_json_pretty()?;
        self.source.emit(&json, &Output::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::tests::{fixture, parse_manifest, read_json};

    #[test]
    fn test_manifest_includes_settings_and_navbar() {
        let temp_dir = fixture();
        let config = temp_dir.path().join("navgen.toml");
        let out = temp_dir.path().join("manifest.json");

        let args = parse_manifest(&[
            "-c",
            config.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);
        args.execute().unwrap();

        let json = read_json(&out);
        assert_eq!(json["title"], "Notes");
        assert_eq!(json["lang"], "en-US");
        assert_eq!(json["plugins"], serde_json::json!([{ "name": "search" }]));
        assert_eq!(json["theme"]["sidebarDepth"], 4);
        assert_eq!(json["markdown"]["headers"]["level"], serde_json::json!([2, 3, 4]));

        let navbar = json["theme"]["navbar"].as_array().unwrap();
        assert_eq!(navbar.len(), 3);
        assert_eq!(navbar[0], serde_json::json!({ "text": "Home", "link": "/" }));
    }

    #[test]
    fn test_manifest_missing_config_fails() {
        let temp_dir = fixture();
        let missing = temp_dir.path().join("absent.toml");

        let args = parse_manifest(&["-c", missing.to_str().unwrap()]);
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Config(_)), "{err:?}");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_manifest_unwritable_output_fails() {
        let temp_dir = fixture();
        let config = temp_dir.path().join("navgen.toml");
        let out = temp_dir.path().join("no-such-dir").join("manifest.json");

        let args = parse_manifest(&[
            "-c",
            config.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Write { .. }), "{err:?}");
    }
}
