// src/pipeline.rs
// =============================================================================
// Wires the steps together, one after another:
//
//   fetch pages -> save snapshot -> extract links -> dedupe
//     -> create output dir -> for each link: resolve, validate, download
//
// Nothing here is fatal. Every failure is logged and the run moves on to
// the next page or link. The only thing carried between runs is what is
// already on disk.
// =============================================================================

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::download::{append_snapshot, download_file, ensure_output_dir, fetch_page};
use crate::harvest::{dedupe, is_valid_url, resolve_link, LinkExtractor};
use crate::http::Transport;

/// Runs one harvest and returns how many new documents were written
pub async fn run_harvest(config: &Config, transport: &dyn Transport) -> usize {
    let mut pages = Vec::new();
    for url in &config.source_urls {
        match fetch_page(transport, url, config.page_timeout).await {
            Ok(text) => {
                debug!(url = url.as_str(), bytes = text.len(), "page fetched");
                pages.push(text);
            }
            Err(e) => warn!(url = url.as_str(), error = %e, "could not fetch page"),
        }
    }
    let page_text = pages.concat();

    if let Err(e) = append_snapshot(&config.snapshot_path, &page_text).await {
        warn!(path = %config.snapshot_path.display(), error = %e, "could not write snapshot");
    }

    let extractor = LinkExtractor::new(&config.extension);
    let links = dedupe(extractor.extract(&page_text));
    info!(count = links.len(), "unique document links found");

    match ensure_output_dir(&config.output_dir, config.output_dir_mode).await {
        Ok(true) => info!(path = %config.output_dir.display(), "created output directory"),
        Ok(false) => {}
        Err(e) => warn!(path = %config.output_dir.display(), error = %e, "could not create output directory"),
    }

    let settings = config.download_settings();
    let mut downloaded = 0;
    for link in links {
        let url = resolve_link(&config.base_url, &link);
        if !is_valid_url(&url) {
            warn!(url = url.as_str(), "skipping malformed URL");
            continue;
        }
        if download_file(transport, &url, &config.output_dir, &settings).await {
            downloaded += 1;
        }
    }

    downloaded
}
