// src/download/mod.rs
// =============================================================================
// This module holds every step that has a side effect.
//
// Submodules:
// - page: fetches a source page as text
// - file: downloads one document into the output directory
// - snapshot: keeps a local copy of the page text, creates the output dir
//
// Failures are reported to the caller (or logged, for the downloader)
// and never abort the run.
// =============================================================================

mod file;
mod page;
mod snapshot;

pub use file::download_file;
pub use page::fetch_page;
pub use snapshot::{append_snapshot, ensure_output_dir};
