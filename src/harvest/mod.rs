// src/harvest/mod.rs
// =============================================================================
// This module turns page text into a clean list of document URLs.
//
// Submodules:
// - extract: finds links ending in the document extension, drops repeats
// - filename: derives a safe local filename from a URL
// - resolve: makes candidate links absolute and rejects malformed ones
//
// Nothing in here touches the network or the disk, which keeps it easy
// to test with plain strings.
// =============================================================================

mod extract;
mod filename;
mod resolve;

pub use extract::{dedupe, LinkExtractor};
pub use filename::sanitize_filename;
pub use resolve::{is_valid_url, resolve_link};
