//! Error handling for the veil CLI.
//!
//! A thin `thiserror` hierarchy over the pipeline's `BundleError`. The
//! binary converts everything to miette reports at the top of `main` so
//! fatal diagnostics carry actionable hints (see [`miette`]).

use thiserror::Error;
use veil_bundler::BundleError;

pub(crate) mod miette;

pub use self::miette::cli_error_to_miette;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failures from the bundling pipeline
    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
