//! Logging infrastructure for the veil CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity control
//! (`--verbose` for debug, `--quiet` for errors only) and `RUST_LOG`
//! overrides for debugging.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for veil crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for veil crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("veil_cli=debug,veil_bundler=debug,veil_extract=debug")
    } else if quiet {
        EnvFilter::new("veil_cli=error,veil_bundler=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("veil_cli=info,veil_bundler=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only cover filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _filter = EnvFilter::new("veil_cli=debug,veil_bundler=debug,veil_extract=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _filter = EnvFilter::new("veil_cli=error,veil_bundler=error");
    }
}
