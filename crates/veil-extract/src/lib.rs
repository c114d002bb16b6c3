//! Payload extraction for the veil stealth bundler.
//!
//! Every evasion module in `puppeteer-extra-plugin-stealth` injects its
//! payload through a call of the form `.evaluateOnNewDocument(<fn>)`, where
//! `<fn>` is either a traditional `function` literal or an arrow function.
//! This crate locates that call in raw source text and splits the argument
//! into a parameter-list string and a balanced `{...}` body, using substring
//! search and brace counting only - deliberately no JavaScript parser.
//!
//! The three pieces mirror the extraction steps:
//!
//! - [`balanced_block`] - balanced-brace span matching
//! - [`split`] - marker location and function/arrow signature splitting
//! - [`needs_utils`] - calling-convention classification

mod braces;
mod convention;
mod signature;

pub use braces::balanced_block;
pub use convention::{needs_utils, UTILS_TOKEN};
pub use signature::{split, ExtractError, ExtractedSignature, MARKER};
