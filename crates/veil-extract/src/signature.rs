//! Signature splitting for evasion payloads.
//!
//! Finds the injection call in a unit's raw text and splits its
//! function-literal argument into parameter text and a body block. Two
//! grammars are recognized: `function ([params]) {...}` and arrow functions
//! (`() => {...}`, `utils => {...}`, `(utils, opts) => {...}`).

use memchr::{memchr, memmem};
use thiserror::Error;

use crate::braces::balanced_block;

/// Call-expression marker every evasion uses to inject its payload.
pub const MARKER: &str = ".evaluateOnNewDocument(";

const FUNCTION_KEYWORD: &str = "function";
const ARROW: &str = "=>";

/// Raw parameter list and body split out of a payload function literal.
///
/// `params` is verbatim source text (trimmed, enclosing parens stripped);
/// `body` is a balanced `{...}` block including both braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSignature {
    pub params: String,
    pub body: String,
}

/// Why a unit yielded no payload.
///
/// Every variant is recoverable at the pipeline level: the unit is skipped
/// with a warning, never the whole run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The unit does not inject a payload in the expected convention.
    #[error("no `.evaluateOnNewDocument(` call found")]
    MarkerNotFound,

    /// Argument looked like an arrow function but no `=>` follows.
    #[error("expected `=>` after the payload parameter list")]
    MissingArrow,

    /// No `{` body block where the grammar requires one.
    #[error("no `{{` body block after the payload parameter list")]
    MissingBody,

    /// Body block opened but never closed before end of text.
    #[error("payload body starting at byte {position} is unterminated")]
    UnterminatedBlock {
        /// Byte position of the unmatched `{`.
        position: usize,
    },
}

/// Split the first payload in `text` into parameters and body.
///
/// Only the first occurrence of [`MARKER`] is honored; later occurrences
/// are ignored. Parameters are returned trimmed of surrounding whitespace.
pub fn split(text: &str) -> Result<ExtractedSignature, ExtractError> {
    let bytes = text.as_bytes();
    let marker =
        memmem::find(bytes, MARKER.as_bytes()).ok_or(ExtractError::MarkerNotFound)?;

    let mut pos = marker + MARKER.len();
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let (params, after_params) = if text[pos..].starts_with(FUNCTION_KEYWORD) {
        split_function_form(text, pos)?
    } else {
        split_arrow_form(text, pos)?
    };

    let body_start = find_byte(text, after_params, b'{').ok_or(ExtractError::MissingBody)?;
    let body = balanced_block(text, body_start)
        .ok_or(ExtractError::UnterminatedBlock { position: body_start })?;

    Ok(ExtractedSignature {
        params: params.trim().to_string(),
        body: body.to_string(),
    })
}

/// `function ([params]) { ... }` - parameters are the verbatim text between
/// the parens; the body is anchored after the closing paren.
fn split_function_form(text: &str, pos: usize) -> Result<(String, usize), ExtractError> {
    let open = find_byte(text, pos, b'(').ok_or(ExtractError::MissingBody)?;
    let close = find_byte(text, open + 1, b')').ok_or(ExtractError::MissingBody)?;
    Ok((text[open + 1..close].to_string(), close + 1))
}

/// Arrow form - everything up to the first `=>` is the raw parameter text.
/// A leading `(` and trailing `)` are each stripped when present; bare
/// single-identifier arrows carry no parens at all.
fn split_arrow_form(text: &str, pos: usize) -> Result<(String, usize), ExtractError> {
    let arrow = memmem::find(&text.as_bytes()[pos..], ARROW.as_bytes())
        .map(|i| pos + i)
        .ok_or(ExtractError::MissingArrow)?;

    let raw = text[pos..arrow].trim();
    let stripped = raw.strip_prefix('(').unwrap_or(raw);
    let stripped = stripped.strip_suffix(')').unwrap_or(stripped);

    Ok((stripped.to_string(), arrow + ARROW.len()))
}

fn find_byte(text: &str, start: usize, needle: u8) -> Option<usize> {
    memchr(needle, &text.as_bytes()[start..]).map(|i| start + i)
}
