// src/download/file.rs
// =============================================================================
// Downloads one document into the output directory.
//
// How it works:
// 1. Derive the local filename from the URL
// 2. If that file already exists, skip (this is what makes re-runs cheap)
// 3. GET the URL with the download timeout
// 4. Reject anything that is not 200 OK with a document Content-Type
// 5. Read the whole body into memory and reject empty bodies
// 6. Only then create the file and write the bytes
//
// Because the body is buffered before the file is created, none of the
// failures in steps 3-5 can leave a half-written file behind.
// =============================================================================

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::config::DownloadSettings;
use crate::error::DownloadError;
use crate::harvest::sanitize_filename;
use crate::http::Transport;

/// Downloads `url` into `output_dir`.
//
// Parameters:
//   transport: how to reach the network (reqwest in main, stubs in tests)
//   url: the resolved document URL
//   output_dir: where the file goes; the name comes from sanitize_filename
//   settings: timeout, accepted content types, filename rules
//
// Returns: true only if a new file was written. Skips and failures are
// logged and return false.
pub async fn download_file(
    transport: &dyn Transport,
    url: &str,
    output_dir: &Path,
    settings: &DownloadSettings,
) -> bool {
    let filename = sanitize_filename(url, &settings.filename).to_lowercase();
    let path = output_dir.join(filename);

    if is_regular_file(&path).await {
        info!(path = %path.display(), "file already exists, skipping");
        return false;
    }

    match try_download(transport, url, &path, settings).await {
        Ok(bytes) => {
            info!(url, path = %path.display(), bytes, "downloaded document");
            true
        }
        Err(e) => {
            warn!(url, error = %e, "download failed");
            false
        }
    }
}

/// Performs steps 3-6 for an already chosen `path`
//
// Returns: Ok(bytes written) or the reason the document was rejected
pub async fn try_download(
    transport: &dyn Transport,
    url: &str,
    path: &Path,
    settings: &DownloadSettings,
) -> Result<u64, DownloadError> {
    let response = transport.get(url, Some(settings.timeout)).await?;

    if response.status != 200 {
        return Err(DownloadError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    // Substring match, so "application/pdf; charset=binary" is fine
    let content_type = response.content_type.clone().unwrap_or_default();
    let accepted = settings
        .accepted_content_types
        .iter()
        .any(|allowed| content_type.contains(allowed.as_str()));
    if !accepted {
        return Err(DownloadError::ContentType {
            url: url.to_string(),
            content_type,
        });
    }

    let body = response.read_all().await?;
    if body.is_empty() {
        return Err(DownloadError::EmptyBody { url: url.to_string() });
    }

    write_new_file(path, &body).await?;
    Ok(body.len() as u64)
}

// create_new: never clobber a file that appeared since the existence check
async fn write_new_file(path: &Path, body: &[u8]) -> Result<(), DownloadError> {
    let io_err = |source| DownloadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(io_err)?;

    let written = async {
        file.write_all(body).await?;
        file.flush().await
    }
    .await;

    if let Err(source) = written {
        drop(file);
        // A truncated file would be mistaken for a finished download next run
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "could not remove partial file");
        }
        return Err(io_err(source));
    }

    Ok(())
}

async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two functions (download_file and try_download)?
//    - try_download returns Result, so it can use the ? operator freely
//    - download_file turns that Result into a log line and a bool
//    - Tests can assert on the exact DownloadError from try_download
//
// 2. What is create_new?
//    - Opening fails if the file already exists
//    - The existence check and the create are two separate steps, and
//      create_new guarantees we never overwrite anything in between
//
// 3. What is `&dyn Transport`?
//    - A reference to "some type that implements Transport"
//    - The function does not know (or care) which one it got
//    - That is what lets the tests pass in a CountingTransport
// -----------------------------------------------------------------------------
