// src/config.rs
// =============================================================================
// Everything the harvest needs to know, in one struct.
//
// The defaults reproduce the original job: scrape the Wet & Forget safety
// data sheet page and drop every PDF into ./PDFs/. Tests build their own
// Config pointing at a mock server and a temp directory instead.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Page scraped when nothing else is configured
pub const DEFAULT_SOURCE_URL: &str = "https://wetandforget.com/wet-and-forget-sds.html";

/// Prefix glued in front of every extracted link
pub const DEFAULT_BASE_URL: &str = "https://wetandforget.com/";

pub const DEFAULT_SNAPSHOT_PATH: &str = "wetandforget.html";
pub const DEFAULT_OUTPUT_DIR: &str = "PDFs/";

/// Large safety sheets on slow hosts can take a while
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone)]
pub struct Config {
    /// Pages to scrape, fetched in order
    pub source_urls: Vec<String>,
    /// Resolved URL = base_url + candidate link
    pub base_url: String,
    /// Raw page text is appended here on every run
    pub snapshot_path: PathBuf,
    /// Downloaded documents land here
    pub output_dir: PathBuf,
    /// Permission bits for a freshly created output directory (Unix only)
    pub output_dir_mode: u32,
    /// None = wait as long as the server takes
    pub page_timeout: Option<Duration>,
    pub download_timeout: Duration,
    /// Link suffix and enforced filename extension, dot included
    pub extension: String,
    /// A download is accepted if its Content-Type contains any of these
    pub accepted_content_types: Vec<String>,
    /// Removed from sanitized filenames
    pub noise_substrings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_urls: vec![DEFAULT_SOURCE_URL.to_string()],
            base_url: DEFAULT_BASE_URL.to_string(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_dir_mode: 0o755,
            page_timeout: None,
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
            extension: ".pdf".to_string(),
            accepted_content_types: vec![
                "binary/octet-stream".to_string(),
                "application/pdf".to_string(),
            ],
            noise_substrings: vec!["_pdf".to_string()],
        }
    }
}

impl Config {
    /// The subset of settings the downloader cares about
    pub fn download_settings(&self) -> DownloadSettings {
        DownloadSettings {
            timeout: self.download_timeout,
            accepted_content_types: self.accepted_content_types.clone(),
            filename: FilenameRules {
                extension: self.extension.clone(),
                noise_substrings: self.noise_substrings.clone(),
            },
        }
    }
}

/// How URLs are turned into filenames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameRules {
    pub extension: String,
    pub noise_substrings: Vec<String>,
}

impl Default for FilenameRules {
    fn default() -> Self {
        Config::default().download_settings().filename
    }
}

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    pub timeout: Duration,
    pub accepted_content_types: Vec<String>,
    pub filename: FilenameRules,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Config::default().download_settings()
    }
}
