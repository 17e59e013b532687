//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use icaljson_core::constants::APP_NAME;

/// Directory the `docs` command writes to when none is given.
pub const DEFAULT_DOCS_DIR: &str = "docs/cmd";

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version)]
#[command(about = "iCalendar tools")]
#[command(
    long_about = "Work with the iCalendar format (RFC 5545).\n\
                  iCalendar is a standardized way to describe calendar data using a text-based format."
)]
pub struct Cli {
    /// Log debug output to stderr (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate JSON from an ICS file
    #[command(
        long_about = "Generate JSON from an ICS file, inferring dates, integers and lists from the raw text."
    )]
    Generate(GenerateArgs),

    /// Print the version information
    #[command(long_about = "Print the version, git ref and build information of the icaljson tool.")]
    Version,

    /// Write Markdown documentation for every command
    Docs {
        /// Directory the pages are written to
        #[arg(default_value = DEFAULT_DOCS_DIR)]
        dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the ICS file (.ics, .ical or .txt)
    pub ics_path: PathBuf,

    /// Output path for the JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_output() {
        let cli = Cli::try_parse_from(["icaljson", "generate", "cal.ics", "-o", "out.json", "-v"])
            .unwrap();

        assert!(cli.verbose);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.ics_path, PathBuf::from("cal.ics"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn docs_dir_has_default() {
        let cli = Cli::try_parse_from(["icaljson", "docs"]).unwrap();
        let Command::Docs { dir } = cli.command else {
            panic!("expected docs command");
        };
        assert_eq!(dir, PathBuf::from(DEFAULT_DOCS_DIR));
    }

    #[test]
    fn generate_requires_input() {
        assert!(Cli::try_parse_from(["icaljson", "generate"]).is_err());
    }
}
