// src/error.rs
// =============================================================================
// Error types shared by the fetch and download steps.
//
// Every failure in this tool ends the same way (log it, skip it, move on),
// but the enums below still say WHAT went wrong so the log lines are useful
// and so tests can assert on the exact failure.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the HTTP transport itself (before any status check).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not finish within its timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// DNS, connect, TLS or any other failure while sending the request
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The connection broke while the body was being read
    #[error("reading body of {url} failed: {message}")]
    Body { url: String, message: String },
}

/// Why a source page could not be fetched.
///
/// An `Ok("")` from the fetcher means the page really was empty; any
/// failure comes back as one of these instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Why a single document download was abandoned.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Anything other than 200 OK
    #[error("download of {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The server answered, but not with a document
    #[error("invalid content type for {url}: {content_type}")]
    ContentType { url: String, content_type: String },

    /// 200 OK with nothing in it
    #[error("downloaded 0 bytes for {url}")]
    EmptyBody { url: String },

    /// Creating or writing the output file failed
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts_into_download_error() {
        let err: DownloadError = TransportError::Timeout {
            url: "https://example.com/a.pdf".to_string(),
        }
        .into();
        assert!(matches!(err, DownloadError::Transport(TransportError::Timeout { .. })));
        assert_eq!(err.to_string(), "request to https://example.com/a.pdf timed out");
    }

    #[test]
    fn test_io_error_message_names_the_path() {
        let err = DownloadError::Io {
            path: PathBuf::from("PDFs/a.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "could not write PDFs/a.pdf: denied");
    }
}
