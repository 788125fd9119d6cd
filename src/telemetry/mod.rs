//! Logging setup
//!
//! Library code emits `tracing` events; the binary installs a
//! `tracing-subscriber` formatter on stderr so log lines never mix with the
//! questionnaire and report on stdout. `RUST_LOG` overrides the level
//! derived from verbosity flags.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;
use crate::errors::{AssessmentError, Result};

/// Filter directive for a verbosity level
pub fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "warn,maturity=info",
        Verbosity::VeryVerbose => "info,maturity=debug",
    }
}

/// Build the env filter, preferring `RUST_LOG` when set
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)))
}

/// Install the global subscriber
pub fn init(verbosity: Verbosity) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity == Verbosity::VeryVerbose)
        .try_init()
        .map_err(|e| AssessmentError::Generic(format!("Failed to initialize logging: {}", e)))
}
