use thiserror::Error;

/// Unified error type for the client.
///
/// Terminal stream outcomes are split into two channels on purpose: a decode
/// or transport failure surfaces here, while clean completion (explicit
/// `[DONE]` sentinel or natural exhaustion) ends the stream without an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A non-empty, non-sentinel frame failed JSON parsing. Never retried.
    #[error("Frame decode error: {message} (payload: {payload:?})")]
    Decode { message: String, payload: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn decode(message: impl Into<String>, payload: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
            payload: payload.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The underlying transport fault message, without the wrapping variant's
    /// display prefix. Used to recognize completion sentinels that some
    /// transports surface as read faults rather than a clean close.
    pub fn transport_message(&self) -> Option<String> {
        match self {
            Error::Transport(t) => Some(t.message()),
            _ => None,
        }
    }
}
