//! Docport CLI - documentation porting pipeline.
//!
//! Provides commands for:
//! - `nav`: Convert the legacy navigation file into sidebar/tab config
//! - `snippets`: Resolve snippet transclusion directives in a markdown file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, SnippetsArgs};
use output::Output;

/// Docport - documentation porting pipeline.
#[derive(Parser)]
#[command(name = "docport", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the legacy navigation file into sidebar config.
    Nav(NavArgs),
    /// Resolve snippet transclusion directives in a markdown file.
    Snippets(SnippetsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Nav(args) => args.verbose,
        Commands::Snippets(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(&output),
        Commands::Snippets(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nav_flags() {
        let cli = Cli::parse_from(["docport", "nav", "--flat", "--source-dir", "content"]);
        let Commands::Nav(args) = cli.command else {
            panic!("expected nav command");
        };
        assert!(args.flat);
        assert_eq!(args.source_dir, Some(PathBuf::from("content")));
        assert_eq!(args.nav_file, None);
    }

    #[test]
    fn test_parse_snippets_file_argument() {
        let cli = Cli::parse_from(["docport", "snippets", "guide/setup.md"]);
        let Commands::Snippets(args) = cli.command else {
            panic!("expected snippets command");
        };
        assert_eq!(args.file, PathBuf::from("guide/setup.md"));
        assert_eq!(args.snippet_dir, None);
    }
}
