// src/logging.rs
// =============================================================================
// Sets up log output for the run.
//
// Every skip, failure and download is reported through `tracing` macros;
// this file decides where those events go (stderr) and which levels show.
//
// Level priority: RUST_LOG env var > --quiet > --verbose > default (info)
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Maps the CLI flags to a default filter directive
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("could not initialise logging: {}", e))
}
