//! Veil CLI - bundles stealth evasions into one embeddable script.
//!
//! This crate provides the command-line interface over `veil-bundler`,
//! exposing the extraction pipeline through a small CLI with clear error
//! messages.
//!
//! # Architecture
//!
//! - [`error`] - error types with actionable hints, converted to miette
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages and formatting
//! - `cli` - clap argument definitions
//! - `commands` - individual command implementations

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
