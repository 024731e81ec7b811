//! Logging infrastructure for the vbuild CLI.
//!
//! Log lines go to stderr so that stdout carries only the emitted
//! configuration and can be piped straight into the bundler.
//!
//! # Example
//!
//! ```rust,no_run
//! use vbuild_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Resolving configuration");
//! debug!("Project root: {}", "/work/app");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub(crate) const VERBOSE_FILTER: &str = "vbuild=debug,vbuild_config=debug,vbuild_cli=debug";
pub(crate) const QUIET_FILTER: &str = "vbuild=error,vbuild_config=error,vbuild_cli=error";
pub(crate) const DEFAULT_FILTER: &str = "vbuild=info,vbuild_config=info,vbuild_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for vbuild crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for vbuild crates
///
/// Call once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize logger with custom environment filter.
///
/// ```rust,no_run
/// use vbuild_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("vbuild_config=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show the module path (keeps output clean)
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

    // tracing is global and can only be initialised once per process, so
    // these only check that the filters parse.

    #[test]
    fn test_env_filter_verbose() {
        let _filter = EnvFilter::new(VERBOSE_FILTER);
    }

    #[test]
    fn test_env_filter_quiet() {
        let _filter = EnvFilter::new(QUIET_FILTER);
    }

    #[test]
    fn test_env_filter_default() {
        let _filter = EnvFilter::new(DEFAULT_FILTER);
    }
}
