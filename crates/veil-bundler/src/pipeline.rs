//! End-to-end bundling pipeline.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use veil_extract::{needs_utils, split};

use crate::assemble::{assemble, Payload};
use crate::emit::{self, Artifacts};
use crate::error::Result;
use crate::prelude;
use crate::unit::{self, UnitDir};

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// The plugin's `evasions/` directory.
    pub evasions_dir: PathBuf,
    /// Where `evasions.js` and `stealth.rs` land.
    pub out_dir: PathBuf,
    /// Extract and assemble but write nothing (`veil check`).
    pub dry_run: bool,
}

/// One successfully extracted evasion, as reported to the caller.
#[derive(Debug, Clone)]
pub struct ExtractedSummary {
    pub name: String,
    /// Raw parameter text, for the per-unit console line.
    pub params: String,
    pub needs_utils: bool,
}

/// One unit that yielded no payload, and why.
#[derive(Debug, Clone)]
pub struct Skip {
    pub name: String,
    pub reason: String,
}

/// What a pipeline run produced.
#[derive(Debug)]
pub struct BundleReport {
    /// Extracted payloads in ascending name order.
    pub extracted: Vec<ExtractedSummary>,
    /// Skipped units in discovery order.
    pub skipped: Vec<Skip>,
    /// Byte length of the assembled script.
    pub script_bytes: usize,
    /// `None` on a dry run.
    pub artifacts: Option<Artifacts>,
}

enum Outcome {
    Extracted(Payload),
    Skipped(Skip),
}

/// Run the whole pipeline: discover, extract, classify, assemble, emit.
///
/// Unit extraction runs in parallel - units share nothing and their order
/// is irrelevant until the assembler, which is the synchronization barrier
/// and sorts by name. Same inputs always yield byte-identical artifacts.
pub fn bundle(options: &BundleOptions) -> Result<BundleReport> {
    let dirs = unit::discover(&options.evasions_dir)?;
    let prelude = prelude::load(&options.evasions_dir)?;
    debug!(units = dirs.len(), "discovered evasion directories");

    let outcomes = dirs
        .par_iter()
        .map(extract_unit)
        .collect::<Result<Vec<Outcome>>>()?;

    let mut payloads = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Extracted(payload) => payloads.push(payload),
            Outcome::Skipped(skip) => skipped.push(skip),
        }
    }

    payloads.sort_by(|a, b| a.name.cmp(&b.name));
    let extracted: Vec<ExtractedSummary> = payloads
        .iter()
        .map(|p| ExtractedSummary {
            name: p.name.clone(),
            params: p.signature.params.clone(),
            needs_utils: p.needs_utils,
        })
        .collect();

    let script = assemble(&prelude, payloads)?;
    info!(
        payloads = extracted.len(),
        skipped = skipped.len(),
        bytes = script.len(),
        "assembled evasion script"
    );

    let artifacts = if options.dry_run {
        None
    } else {
        Some(emit::write(&options.out_dir, &script)?)
    };

    Ok(BundleReport {
        extracted,
        skipped,
        script_bytes: script.len(),
        artifacts,
    })
}

/// Load, split, and classify one unit. Extraction misses become skips;
/// only unexpected I/O bubbles up as an error.
fn extract_unit(dir: &UnitDir) -> Result<Outcome> {
    let Some(source) = dir.load()? else {
        return Ok(Outcome::Skipped(Skip {
            name: dir.name.clone(),
            reason: format!("no {} entry file", unit::ENTRY_FILE),
        }));
    };

    match split(&source.text) {
        Ok(signature) => {
            let needs_utils = needs_utils(&source.text);
            debug!(name = %source.name, needs_utils, "extracted payload");
            Ok(Outcome::Extracted(Payload {
                name: source.name,
                signature,
                needs_utils,
            }))
        }
        Err(err) => {
            warn!(name = %source.name, %err, "could not extract payload, skipping unit");
            Ok(Outcome::Skipped(Skip {
                name: source.name,
                reason: err.to_string(),
            }))
        }
    }
}
