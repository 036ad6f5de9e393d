//! Structured logging setup.
//!
//! Logs go to stderr only; stdout carries the `key=value` output line.

use tracing_subscriber::filter::EnvFilter;

use crate::error::{RcAlignError, Result};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "RC_ALIGN_LOG";

const DEFAULT_LEVEL: &str = "info";

/// Build an `EnvFilter` from CLI flags and environment.
///
/// Priority: quiet flag > verbose flag > `RC_ALIGN_LOG` > info
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global stderr subscriber
pub fn init_logging(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| RcAlignError::config(format!("Cannot initialize logging: {}", e)))
}
