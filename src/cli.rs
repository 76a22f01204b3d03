// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool is meant to run with no arguments at all: every flag below is
// optional and only overrides one of the defaults in config.rs. The page
// being scraped is not configurable from here.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate the parsing code
// - Option<T>: "the user may or may not have passed this flag"
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "pdf-harvester",
    version = "0.1.0",
    about = "Download every PDF linked from the Wet & Forget safety data sheet page",
    long_about = "pdf-harvester fetches the safety data sheet page, saves a copy of it, finds every \
                  link ending in .pdf and downloads each document into the output directory. \
                  Files that are already there are never downloaded again."
)]
pub struct Cli {
    /// Directory the documents are saved into (default: PDFs/)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// File the fetched page text is appended to (default: wetandforget.html)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Per-document download timeout in seconds (default: 900)
    #[arg(long)]
    pub download_timeout_secs: Option<u64>,

    /// More log output (-v = debug, -vv = trace)
    ///
    /// ArgAction::Count turns repeated flags into a number
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Applies the flags on top of the default configuration
    pub fn into_config(self) -> Config {
        let mut config = Config::default();

        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(path) = self.snapshot {
            config.snapshot_path = path;
        }
        if let Some(secs) = self.download_timeout_secs {
            config.download_timeout = Duration::from_secs(secs);
        }

        config
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<PathBuf> instead of a default_value?
//    - The defaults already live in Config::default()
//    - Option lets us tell "not passed" apart from "passed the default"
//    - So there is exactly one place where the defaults are written down
//
// 2. What is PathBuf?
//    - An owned filesystem path (like String is an owned str)
//    - clap can parse it straight from the command line
//
// 3. Why does into_config take self (not &self)?
//    - We move the PathBufs out of the Cli into the Config
//    - Nothing needs the Cli afterwards, so no clone is needed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::try_parse_from(["pdf-harvester"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);

        let config = cli.into_config();
        let defaults = Config::default();
        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.snapshot_path, defaults.snapshot_path);
        assert_eq!(config.download_timeout, defaults.download_timeout);
        assert_eq!(config.source_urls, defaults.source_urls);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pdf-harvester",
            "--output-dir",
            "out",
            "--snapshot",
            "page.html",
            "--download-timeout-secs",
            "30",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let config = cli.into_config();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.snapshot_path, PathBuf::from("page.html"));
        assert_eq!(config.download_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pdf-harvester", "-q", "-v"]).is_err());
    }
}
