//! Logging setup built on the `tracing` ecosystem.
//!
//! Verbosity is picked in this order:
//! 1. `--verbose`: debug for the pagemap crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: info for the pagemap crates
//!
//! # Example
//!
//! ```rust,no_run
//! use pagemap_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Loading manifest");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "pagemap=debug,pagemap_cli=debug,pagemap_config=debug";
const QUIET_FILTER: &str = "pagemap=error,pagemap_cli=error,pagemap_config=error";
const DEFAULT_FILTER: &str = "pagemap=info,pagemap_cli=info,pagemap_config=info";

/// Build the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so `pagemap emit` output on stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is global and can only be installed once per process,
    // so these only exercise filter construction.

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("pagemap_config=debug"));
    }

    #[test]
    fn test_quiet_filter_is_errors_only() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().contains("pagemap_cli=error"));
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = filter_for(true, true);
        assert!(filter.to_string().contains("debug"));
    }
}
