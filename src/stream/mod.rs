//! Event-stream consumption and decoding.
//!
//! This is the core of the crate: a line-oriented, self-delimited frame
//! protocol carried over a chunked HTTP response body, decoded into a lazy
//! sequence of typed events with exactly-once terminal signalling (clean
//! completion, the `[DONE]` sentinel, or a single error).
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`frame`] | Per-line frame grammar, shared with the batch path |
//! | [`decode`] | [`Decoder`] trait and the line-buffering stream decoder |

pub mod decode;
pub mod frame;

pub use decode::{Decoder, EventStreamDecoder};
pub use frame::{Frame, DONE_SENTINEL};
