//! Miette diagnostic conversion for CLI errors.
//!
//! Each fatal pipeline condition gets a distinct human-readable diagnostic
//! with a hint naming the usual fix.

use miette::Report;
use veil_bundler::BundleError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundle(e) => bundle_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BundleError to miette Report
pub fn bundle_error_to_miette(err: BundleError) -> Report {
    match err {
        BundleError::PluginNotFound(path) => miette::miette!(
            "Evasions directory not found: {}\n\nHint: npm install puppeteer-extra-plugin-stealth",
            path.display()
        ),
        BundleError::PreludeNotFound(path) => miette::miette!(
            "Shared utils prelude not found: {}\n\nHint: the plugin layout may have changed; reinstall it and retry",
            path.display()
        ),
        BundleError::NoPayloads => miette::miette!(
            "No evasion payloads could be extracted\n\nHint: the plugin's payload format may have changed; check for a veil update"
        ),
        _ => miette::miette!("{}", err),
    }
}
