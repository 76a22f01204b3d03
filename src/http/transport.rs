// src/http/transport.rs
// =============================================================================
// A tiny abstraction over "send a GET, get back status + headers + body".
//
// Why a trait?
// - The fetcher and downloader only need three things from a response:
//   the status code, the Content-Type header and the bytes
// - Hiding reqwest behind a trait lets tests swap in a stub transport
//   (for example one that fails the test if it is ever called)
//
// The body is handed out as a stream, not a Vec, so the caller decides
// whether to read it at all. Dropping an HttpResponse closes the
// connection, whichever path the caller leaves by.
//
// Rust concepts:
// - async-trait: async methods on a trait that we use as `dyn Transport`
// - Streams: the async version of an iterator
// =============================================================================

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::TransportError;

/// Response body, one chunk at a time
pub type BodyStream = BoxStream<'static, Result<Bytes, TransportError>>;

/// The parts of an HTTP response this tool looks at
pub struct HttpResponse {
    /// Numeric status code (200, 404, ...)
    pub status: u16,
    /// Raw Content-Type header, if the server sent one
    pub content_type: Option<String>,
    /// Not yet read from the wire
    pub body: BodyStream,
}

impl HttpResponse {
    /// Reads the whole body into memory
    //
    // Returns: every byte of the body, or the first error from the stream
    pub async fn read_all(mut self) -> Result<Vec<u8>, TransportError> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf)
    }
}

// BoxStream has no Debug impl, so we write one by hand
impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET request.
    ///
    /// `timeout` bounds the whole exchange, body included. `None` waits
    /// for as long as the server takes.
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, TransportError>;
}

/// The real transport, backed by one shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    // The client is created once and reused for every request
    // (reqwest keeps a connection pool inside it)
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request {
                url: String::new(),
                message: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        // Body errors need the URL too, so map them as they stream past
        let body_url = url.to_string();
        let body = response
            .bytes_stream()
            .map(move |chunk| {
                chunk.map_err(|e| {
                    if e.is_timeout() {
                        TransportError::Timeout { url: body_url.clone() }
                    } else {
                        TransportError::Body {
                            url: body_url.clone(),
                            message: e.to_string(),
                        }
                    }
                })
            })
            .boxed();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

// Turns a reqwest send error into one of our variants
//
// Parameters:
//   url: the URL we were requesting (reqwest errors do not always carry it)
//   error: what reqwest reported
//
// Returns: Timeout for timeouts, Request for everything else
fn categorize_error(url: &str, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout { url: url.to_string() }
    } else {
        TransportError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - A trait with async fns cannot be used as `dyn Transport` on its own
//    - async_trait rewrites each method to return a boxed future
//    - The cost is one small allocation per call, which is nothing next to
//      a network round trip
//
// 2. What is BoxStream<'static, ...>?
//    - A heap-allocated stream of chunks that owns everything it needs
//    - 'static means it does not borrow from the transport or the request
//    - .boxed() (from StreamExt) turns reqwest's stream into one
//
// 3. What does `move` do in the map closure?
//    - The closure takes ownership of body_url
//    - It has to, because the stream outlives this function
//
// 4. Why can `?` be used on a chunk inside read_all?
//    - Each chunk is Result<Bytes, TransportError>
//    - read_all also returns TransportError, so ? passes it straight up
// -----------------------------------------------------------------------------
