// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the configuration and the HTTP transport
// 4. Run the harvest (fetch page, find PDFs, download them)
// 5. Exit with 0, or 2 if the run could not even start
//
// Individual download failures never change the exit code: they are
// logged and skipped.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - settings with the original job's defaults
mod download;      // src/download/ - page fetch, document download, snapshot
mod error;         // src/error.rs - error enums
mod harvest;       // src/harvest/ - link extraction, dedupe, filenames
mod http;          // src/http/ - the Transport abstraction over reqwest
mod logging;       // src/logging.rs - tracing subscriber setup
mod pipeline;      // src/pipeline.rs - runs the steps in order

use anyhow::Result;
use clap::Parser;  // Parser trait enables the parse() method
use tracing::debug;

use cli::Cli;
use http::ReqwestTransport;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Logging may not be up yet, so go straight to stderr
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    // Parse before logging so --help and --version print cleanly
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    let config = cli.into_config();
    debug!(?config, "configuration loaded");

    let transport = ReqwestTransport::new()?;
    let downloaded = pipeline::run_harvest(&config, &transport).await;
    debug!(downloaded, "harvest finished");

    Ok(())
}
