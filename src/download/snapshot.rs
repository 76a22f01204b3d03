// src/download/snapshot.rs
// =============================================================================
// Local filesystem setup for a run:
// - append the fetched page text to the snapshot file
// - make sure the output directory exists
//
// Both return io::Result; the pipeline logs errors and keeps going.
// =============================================================================

use std::io;
use std::path::Path;

use tokio::io::AsyncWriteExt;

/// Appends `content` plus a trailing newline, creating the file if needed
pub async fn append_snapshot(path: &Path, content: &str) -> io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await
}

/// Creates `path` with `mode` unless it is already a directory.
///
/// Returns true if the directory was created by this call.
pub async fn ensure_output_dir(path: &Path, mode: u32) -> io::Result<bool> {
    if let Ok(meta) = tokio::fs::metadata(path).await {
        if meta.is_dir() {
            return Ok(false);
        }
    }

    let mut builder = tokio::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path).await?;
    Ok(true)
}
