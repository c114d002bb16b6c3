//! Bundle command implementation.
//!
//! Drives the `veil-bundler` pipeline and renders its report: one line per
//! extracted evasion, one warning per skipped unit, and a closing summary
//! with the artifact size and payload count.

use std::time::Instant;

use tracing::debug;
use veil_bundler::{bundle, BundleOptions, BundleReport};

use crate::cli::BundleArgs;
use crate::error::Result;
use crate::ui;

/// Execute the bundle command.
///
/// # Process
///
/// 1. Discover evasion units and the shared utils prelude
/// 2. Extract and classify every payload (parallel, per-unit skips)
/// 3. Assemble the combined script in name order
/// 4. Write evasions.js and the stealth.rs embed wrapper
pub fn execute(args: BundleArgs) -> Result<()> {
    let start_time = Instant::now();

    let options = BundleOptions {
        evasions_dir: args.plugin_dir,
        out_dir: args.out_dir,
        dry_run: false,
    };
    debug!(?options, "starting bundle");

    let report = bundle(&options)?;
    report_units(&report);

    if let Some(artifacts) = &report.artifacts {
        ui::info(&format!(
            "Wrote {} ({}, {} evasions)",
            artifacts.script.display(),
            ui::format_size(report.script_bytes as u64),
            report.extracted.len()
        ));
        ui::info(&format!("Wrote {}", artifacts.wrapper.display()));
    }

    ui::success(&format!(
        "Bundle completed in {}",
        ui::format_duration(start_time.elapsed())
    ));
    Ok(())
}

/// Per-unit console lines: skips first so they are not buried under the
/// success listing.
pub(crate) fn report_units(report: &BundleReport) {
    for skip in &report.skipped {
        ui::warning(&format!(
            "could not extract \"{}\": {} - skipping",
            skip.name, skip.reason
        ));
    }
    for payload in &report.extracted {
        ui::success(&format!(
            "{}  (params: \"{}\"{})",
            payload.name,
            payload.params,
            if payload.needs_utils { ", with utils" } else { "" }
        ));
    }
}
