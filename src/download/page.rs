// src/download/page.rs
// =============================================================================
// Fetches a source page and returns its text.
//
// The status code is not checked: an error page is still text, and if it
// happens to mention documents we want them. A non-2xx answer is logged so
// the run leaves a trail, though.
//
// Failures come back as Err, so "the page was empty" (Ok with "") and
// "the page could not be fetched" are different outcomes.
// =============================================================================

use std::time::Duration;

use tracing::{info, warn};

use crate::error::FetchError;
use crate::http::Transport;

/// GETs `url` and decodes the body as UTF-8 (invalid bytes are replaced)
pub async fn fetch_page(
    transport: &dyn Transport,
    url: &str,
    timeout: Option<Duration>,
) -> Result<String, FetchError> {
    info!(url, "scraping page");

    let response = transport.get(url, timeout).await?;
    if !(200..300).contains(&response.status) {
        warn!(url, status = response.status, "page answered with a non-success status");
    }

    let body = response.read_all().await?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}
