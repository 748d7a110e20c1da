//! `docport snippets` - resolve transclusion directives in a markdown file.

use std::path::PathBuf;

use clap::Args;

use docport_config::{CliSettings, Config};
use docport_snippets::SnippetEngine;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `snippets` command.
#[derive(Args)]
pub(crate) struct SnippetsArgs {
    /// Markdown file to process.
    pub file: PathBuf,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base directory for resolving snippet references.
    #[arg(long)]
    pub snippet_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SnippetsArgs {
    /// Execute the `snippets` command.
    ///
    /// Prints the rewritten markdown to stdout; snippet failures surface as
    /// inline placeholders plus warnings on stderr, never as a failed build.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: None,
            nav_file: None,
            snippet_dir: self.snippet_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let content = std::fs::read_to_string(&self.file)?;
        let mut engine =
            SnippetEngine::new().with_base_dir(config.snippets_resolved.base_dir.clone());
        let rewritten = engine.process_markdown(&content);

        output.data(&rewritten);
        for warning in engine.warnings() {
            output.warning(warning);
        }

        Ok(())
    }
}
