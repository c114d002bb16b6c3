//! Command-line interface definition for the veil bundler.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `veil bundle` - Extract evasions and write the script + embed wrapper
//! - `veil check` - Validate the plugin tree without writing anything

mod commands;

use clap::Parser;

pub use commands::{BundleArgs, CheckArgs, Command, DEFAULT_PLUGIN_DIR};

/// Veil - bundle stealth evasions into one embeddable script
#[derive(Parser, Debug)]
#[command(
    name = "veil",
    version,
    about = "Bundle puppeteer-extra stealth evasions into one embeddable script",
    long_about = "Veil extracts the injectable payload from every evasion module of\n\
                  puppeteer-extra-plugin-stealth, bundles them with the plugin's shared\n\
                  utilities into a single self-invoking script, and writes a Rust wrapper\n\
                  that embeds the script as a string constant."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-unit extraction detail, including which calling
    /// convention each evasion was classified under.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Useful for CI environments or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bundle_defaults() {
        let cli = Cli::parse_from(["veil", "bundle"]);
        let Command::Bundle(args) = cli.command else {
            panic!("expected bundle command");
        };
        assert_eq!(
            args.plugin_dir.to_string_lossy(),
            DEFAULT_PLUGIN_DIR
        );
        assert_eq!(args.out_dir.to_string_lossy(), "ext/stealth");
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["veil", "-v", "-q", "bundle"]).is_err());
    }

    #[test]
    fn check_takes_plugin_dir() {
        let cli = Cli::parse_from(["veil", "check", "--plugin-dir", "/tmp/evasions"]);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.plugin_dir.to_string_lossy(), "/tmp/evasions");
    }
}
