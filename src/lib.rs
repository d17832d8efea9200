//! # chatgpt-client
//!
//! Async client for the ChatGPT conversation backend, built around a
//! line-oriented streaming decoder for the `data: `-framed event protocol
//! the service speaks over chunked HTTP responses.
//!
//! ## Overview
//!
//! The client sends one conversation turn per request and consumes the
//! response either incrementally (a lazy stream of decoded events, one per
//! wire frame) or as a single materialized batch. Both paths share the same
//! frame grammar: skip keep-alive lines, stop on the `[DONE]` sentinel,
//! strip the `data:` marker and JSON-decode the rest.
//!
//! ## Key Features
//!
//! - **Streaming-First**: [`ConversationClient::stream_conversation`] yields
//!   events as chunks arrive; partial lines across chunk boundaries are
//!   buffered transparently
//! - **Batch Mode**: [`ConversationClient::fetch_conversation`] reads the
//!   whole body and decodes it with the same frame rules
//! - **Typed Errors**: decode failures and transport faults are distinct
//!   error variants; clean termination is never an error
//! - **Bearer Auth**: the access token is injected on every outbound call
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatgpt_client::ConversationClientBuilder;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> chatgpt_client::Result<()> {
//!     let client = ConversationClientBuilder::new()
//!         .access_token("your-access-token")
//!         .build()?;
//!
//!     let mut events = client.stream_conversation("Hello, how are you?").await?;
//!     while let Some(event) = events.next().await {
//!         let event = event?;
//!         if let Some(message) = event.message {
//!             println!("{:?}", message.content.parts);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Conversation client and builder |
//! | [`stream`] | Frame grammar and the streaming event decoder |
//! | [`transport`] | HTTP transport over reqwest |
//! | [`types`] | Request and response data model |

pub mod client;
pub mod stream;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ConversationClient, ConversationClientBuilder};
pub use stream::{Decoder, EventStreamDecoder};
pub use types::{
    request::{Content, ConversationRequest, Message},
    response::{ConversationPage, ConversationResponse, ModelCatalog, ModelInfo},
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::Error;
