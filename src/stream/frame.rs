//! Per-line frame grammar shared by the streaming and batch decode paths.
//!
//! Wire framing, preserved bit-exact for interoperability: newline-delimited
//! text frames; meaningful frames are exactly `"data: " + <json>`; the end
//! marker is the line content `data: [DONE]`.

use crate::types::response::ConversationResponse;
use crate::{Error, Result};

/// The 5-character marker stripped from the front of every data frame.
pub const DATA_MARKER: &str = "data:";

/// Literal sentinel text signalling a normal, successful end of stream.
pub const DONE_SENTINEL: &str = "data: [DONE]";

/// Outcome of classifying one line of the response body.
#[derive(Debug)]
pub enum Frame {
    /// Keep-alive / formatting artifact. Not an event, does not terminate.
    Skip,
    /// The completion sentinel. Suppressed from output; terminates cleanly.
    Done,
    /// A decoded data event.
    Event(ConversationResponse),
}

/// Classify one frame line.
///
/// Non-empty, non-sentinel lines are assumed to begin with the data marker;
/// exactly its length is stripped and the remainder (leading space included)
/// is JSON. A parse failure here is a hard error, never skipped.
pub fn classify(line: &str) -> Result<Frame> {
    if line.is_empty() {
        return Ok(Frame::Skip);
    }

    if line.contains(DONE_SENTINEL) {
        return Ok(Frame::Done);
    }

    let payload = line
        .get(DATA_MARKER.len()..)
        .ok_or_else(|| Error::decode("frame shorter than the data marker", line))?;

    let event = serde_json::from_str(payload).map_err(|e| Error::decode(e.to_string(), payload))?;
    Ok(Frame::Event(event))
}
