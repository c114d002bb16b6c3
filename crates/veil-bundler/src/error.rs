//! Error types for the bundling pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundleError>;

/// Fatal pipeline failures.
///
/// Per-unit extraction misses are not errors; they travel as
/// [`Skip`](crate::pipeline::Skip) entries in the report instead.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The plugin's evasions directory does not exist.
    #[error("evasions directory not found: {0}")]
    PluginNotFound(PathBuf),

    /// The shared `_utils/index.js` prelude is missing.
    #[error("shared utils prelude not found: {0}")]
    PreludeNotFound(PathBuf),

    /// Every unit failed extraction; emitting a no-op script would only
    /// mask an upstream format change.
    #[error("no evasion payloads extracted")]
    NoPayloads,

    /// I/O failure reading inputs or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
