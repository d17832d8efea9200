//! Streaming decoder: raw byte chunks in, conversation events out.
//!
//! The transport delivers arbitrary byte chunks; lines may be split across
//! chunk boundaries, so the decoder buffers until a newline arrives before
//! classifying a frame.

use crate::stream::frame::{self, Frame, DONE_SENTINEL};
use crate::types::response::ConversationResponse;
use crate::BoxStream;
use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, StreamExt};
use tracing::debug;

/// Decoder seam between the transport's byte stream and typed events.
#[async_trait]
pub trait Decoder: Send + Sync {
    /// Decode a byte stream into a lazy sequence of conversation events.
    ///
    /// The returned stream is single-pass: once it yields its terminal
    /// outcome (clean end or a single error), further polls yield nothing.
    async fn decode_stream(
        &self,
        input: BoxStream<'static, Bytes>,
    ) -> BoxStream<'static, ConversationResponse>;
}

/// Line-buffering decoder for the `data: `-framed event protocol.
///
/// Termination rules:
/// - a frame containing the `[DONE]` sentinel ends the stream cleanly and is
///   suppressed from the output; no further input is read
/// - natural exhaustion of the input without the sentinel is also a clean
///   end (the service is not contractually required to send it)
/// - a read fault whose message equals the sentinel text is reclassified as
///   a clean end; any other fault propagates as a transport error
#[derive(Debug, Default)]
pub struct EventStreamDecoder;

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self
    }
}

struct DecodeState {
    input: BoxStream<'static, Bytes>,
    buf: String,
    terminated: bool,
}

#[async_trait]
impl Decoder for EventStreamDecoder {
    async fn decode_stream(
        &self,
        input: BoxStream<'static, Bytes>,
    ) -> BoxStream<'static, ConversationResponse> {
        let state = DecodeState {
            input,
            buf: String::new(),
            terminated: false,
        };

        let stream = stream::unfold(state, |mut st| async move {
            if st.terminated {
                return None;
            }

            loop {
                // Emit every full line already buffered before reading more.
                if let Some(idx) = st.buf.find('\n') {
                    let line = st.buf[..idx].to_string();
                    st.buf = st.buf[idx + 1..].to_string();

                    match frame::classify(&line) {
                        Ok(Frame::Skip) => continue,
                        Ok(Frame::Done) => {
                            debug!("completion sentinel observed, ending stream");
                            return None;
                        }
                        Ok(Frame::Event(ev)) => return Some((Ok(ev), st)),
                        Err(e) => {
                            st.terminated = true;
                            return Some((Err(e), st));
                        }
                    }
                }

                match st.input.next().await {
                    Some(Ok(bytes)) => {
                        st.buf.push_str(&String::from_utf8_lossy(&bytes));
                    }
                    Some(Err(e)) => {
                        // Some transports surface the sentinel as a read
                        // fault instead of a clean close. The match is exact
                        // string equality on the fault message; transport
                        // wrapping or localization would break it.
                        if e.transport_message().as_deref() == Some(DONE_SENTINEL) {
                            debug!("read fault carried the completion sentinel, ending stream");
                            return None;
                        }
                        st.terminated = true;
                        return Some((Err(e), st));
                    }
                    None => {
                        // Natural exhaustion. A trailing partial line still
                        // goes through the frame rules before the clean end.
                        if st.buf.is_empty() {
                            return None;
                        }
                        let line = std::mem::take(&mut st.buf);
                        st.terminated = true;
                        return match frame::classify(&line) {
                            Ok(Frame::Skip) | Ok(Frame::Done) => None,
                            Ok(Frame::Event(ev)) => Some((Ok(ev), st)),
                            Err(e) => Some((Err(e), st)),
                        };
                    }
                }
            }
        });

        // Fused: re-polling after the terminal outcome yields nothing
        // instead of panicking.
        Box::pin(stream.fuse())
    }
}
