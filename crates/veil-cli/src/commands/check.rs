//! Check command implementation.
//!
//! Validates the plugin tree without writing artifacts: the full pipeline
//! runs in dry-run mode, so the exit code and per-unit report match what a
//! real bundle run would produce.

use std::path::PathBuf;

use veil_bundler::{bundle, BundleOptions};

use crate::cli::CheckArgs;
use crate::commands::bundle::report_units;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking plugin tree...");

    let options = BundleOptions {
        evasions_dir: args.plugin_dir,
        out_dir: PathBuf::new(),
        dry_run: true,
    };

    let report = bundle(&options)?;
    report_units(&report);

    ui::success(&format!(
        "{} evasions extractable ({} would be skipped), script would be {}",
        report.extracted.len(),
        report.skipped.len(),
        ui::format_size(report.script_bytes as u64)
    ));
    Ok(())
}
