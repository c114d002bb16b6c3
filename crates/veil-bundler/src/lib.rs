//! Evasion bundling pipeline for veil.
//!
//! Takes the `evasions/` directory of `puppeteer-extra-plugin-stealth`,
//! extracts every injectable payload, and assembles them with the shared
//! utils prelude into one self-invoking script plus a Rust embed wrapper.
//!
//! This crate is UI-free: it emits `tracing` events and returns a typed
//! [`BundleReport`]. Callers install their own subscriber and render the
//! report however they like.
//!
//! # Pipeline
//!
//! 1. [`unit::discover`] - enumerate evasion subdirectories (name order)
//! 2. [`prelude::load`] - load `_utils/index.js`, strip the CJS export
//! 3. extraction - split and classify each unit (parallel, per-unit skips)
//! 4. [`assemble`] - one script, payloads isolated and name-sorted
//! 5. [`emit`] - write `evasions.js` and the `stealth.rs` embed wrapper

pub mod assemble;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod unit;

pub use assemble::{assemble, Payload, INIT_STATEMENT, SCRIPT_HEADER};
pub use emit::Artifacts;
pub use error::{BundleError, Result};
pub use pipeline::{bundle, BundleOptions, BundleReport, ExtractedSummary, Skip};
pub use unit::SourceUnit;
