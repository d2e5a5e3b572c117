//! `navgen nav` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source directory cannot
    /// be scanned, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        tracing::info!(
            source_dir = %config.docs_resolved.source_dir.display(),
            "Generating navbar"
        );

        let navbar = navgen_site::generate_navbar(&config)?;
        let json = serde_json::to_string_pretty(&navbar)?;
        self.source.emit(&json, &Output::new())
    }
}
