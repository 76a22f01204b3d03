// src/http/mod.rs
// =============================================================================
// This module is the only place that talks to the network.
//
// Submodules:
// - transport: the Transport trait plus its reqwest-backed implementation
//
// Everything else in the crate takes a `&dyn Transport`, so tests can hand
// in a stub that counts calls or a real client pointed at a mock server.
// =============================================================================

mod transport;

pub use transport::{HttpResponse, ReqwestTransport, Transport};
