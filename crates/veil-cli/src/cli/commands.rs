use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Where npm installs the stealth plugin's evasion modules, relative to
/// the project root.
pub const DEFAULT_PLUGIN_DIR: &str = "node_modules/puppeteer-extra-plugin-stealth/evasions";

/// Available veil subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract evasions and write the combined script plus embed wrapper
    ///
    /// Reads every evasion under the plugin's evasions directory, bundles
    /// the payloads with the shared utils prelude into evasions.js, and
    /// writes a stealth.rs wrapper that embeds it via include_str!.
    Bundle(BundleArgs),

    /// Validate the plugin tree and report extractable evasions
    ///
    /// Runs the extraction pipeline without writing any artifacts. Useful
    /// after updating the plugin to preview what a bundle run would
    /// produce and which units would be skipped.
    Check(CheckArgs),
}

/// Arguments for the bundle command
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Directory holding the plugin's evasion modules
    ///
    /// One subdirectory per evasion with an index.js entry file; the
    /// _utils subdirectory supplies the shared prelude.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PLUGIN_DIR)]
    pub plugin_dir: PathBuf,

    /// Output directory for evasions.js and stealth.rs
    ///
    /// Created if it doesn't exist. Both artifacts are regenerable and
    /// safe to overwrite.
    #[arg(short = 'o', long, value_name = "DIR", default_value = "ext/stealth")]
    pub out_dir: PathBuf,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the plugin's evasion modules
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PLUGIN_DIR)]
    pub plugin_dir: PathBuf,
}
