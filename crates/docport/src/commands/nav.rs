//! `docport nav` - convert the legacy navigation into sidebar config.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use docport_config::{CliSettings, Config};
use docport_nav::{SlugResolver, build_multi_sidebar, build_sidebar, build_tabs, load_nav};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `nav` command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Content root used to validate page references.
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Legacy navigation file to convert.
    #[arg(long)]
    pub nav_file: Option<PathBuf>,

    /// Emit one flat sidebar instead of tabs and per-tab sidebars.
    #[arg(long)]
    pub flat: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavArgs {
    /// Execute the `nav` command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            nav_file: self.nav_file,
            snippet_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let entries = load_nav(&config.docs_resolved.nav_file)?;
        let resolver = SlugResolver::new(Some(config.docs_resolved.source_dir.clone()));

        let rendered = if self.flat {
            serde_json::to_string_pretty(&build_sidebar(&entries, &resolver))?
        } else {
            let tabs = build_tabs(&entries, &resolver);
            let sidebars = build_multi_sidebar(tabs.clone());
            serde_json::to_string_pretty(&json!({
                "tabs": tabs,
                "sidebars": sidebars,
            }))?
        };
        output.data(&rendered);

        Ok(())
    }
}
