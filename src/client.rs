//! Conversation client interface.
//!
//! Keep the public surface small and predictable: a builder for
//! configuration, a client for the four backend operations. Implementation
//! details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::ConversationClientBuilder;
pub use core::ConversationClient;
