//! HTTP transport over reqwest.
//!
//! Plain request/response plumbing: bearer-auth header injection, streaming
//! and non-streaming POST, GET with query parameters. Everything stateful
//! about a call lives in the returned body/stream, so transports are freely
//! shared across concurrent calls.

pub mod http;

pub use http::{HttpTransport, TransportError};
