use crate::stream::frame::{self, Frame};
use crate::stream::Decoder;
use crate::transport::HttpTransport;
use crate::types::request::ConversationRequest;
use crate::types::response::{ConversationPage, ConversationResponse, ModelCatalog};
use crate::{BoxStream, Result};
use std::sync::Arc;
use tracing::debug;

pub(crate) const MODELS_PATH: &str = "/backend-api/models";
pub(crate) const CONVERSATIONS_PATH: &str = "/backend-api/conversations";
pub(crate) const CONVERSATION_PATH: &str = "/backend-api/conversation";

/// Client for the conversation backend.
///
/// Each call constructs its own request and stream independently; no state
/// is shared across calls, so a client is freely usable concurrently.
pub struct ConversationClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) decoder: Arc<dyn Decoder>,
    pub(crate) model: String,
}

impl std::fmt::Debug for ConversationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ConversationClient {
    /// Fetch the model catalog. No retry; errors propagate unchanged.
    pub async fn list_models(&self) -> Result<ModelCatalog> {
        let json = self.transport.get_json(MODELS_PATH, &[]).await?;
        Ok(serde_json::from_value(json)?)
    }

    /// Fetch one page of the caller's conversation history.
    ///
    /// `offset` and `limit` are forwarded as-is; out-of-range values are the
    /// service's to reject.
    pub async fn list_conversations(&self, offset: u32, limit: u32) -> Result<ConversationPage> {
        let json = self
            .transport
            .get_json(
                CONVERSATIONS_PATH,
                &[("offset", offset.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(serde_json::from_value(json)?)
    }

    /// Start a new conversation and stream the response events as they
    /// arrive.
    ///
    /// The returned stream is lazy and single-pass. Dropping it before
    /// natural completion releases the underlying connection.
    pub async fn stream_conversation(
        &self,
        input_text: impl Into<String>,
    ) -> Result<BoxStream<'static, ConversationResponse>> {
        let request = ConversationRequest::new_conversation(input_text, self.model.clone());
        self.stream_request(&request).await
    }

    /// Stream a follow-up turn in an existing conversation.
    pub async fn stream_reply(
        &self,
        input_text: impl Into<String>,
        conversation_id: impl Into<String>,
        parent_message_id: impl Into<String>,
    ) -> Result<BoxStream<'static, ConversationResponse>> {
        let request = ConversationRequest::continuation(
            input_text,
            conversation_id,
            parent_message_id,
            self.model.clone(),
        );
        self.stream_request(&request).await
    }

    /// Start a new conversation and return the fully materialized event
    /// list.
    ///
    /// Reads the entire body, then applies the same per-line frame rules as
    /// the streaming path. On any mid-body decode failure the whole call
    /// errors; no partial list is returned.
    pub async fn fetch_conversation(
        &self,
        input_text: impl Into<String>,
    ) -> Result<Vec<ConversationResponse>> {
        let request = ConversationRequest::new_conversation(input_text, self.model.clone());
        self.fetch_request(&request).await
    }

    /// Batch variant of [`stream_reply`](Self::stream_reply).
    pub async fn fetch_reply(
        &self,
        input_text: impl Into<String>,
        conversation_id: impl Into<String>,
        parent_message_id: impl Into<String>,
    ) -> Result<Vec<ConversationResponse>> {
        let request = ConversationRequest::continuation(
            input_text,
            conversation_id,
            parent_message_id,
            self.model.clone(),
        );
        self.fetch_request(&request).await
    }

    async fn stream_request(
        &self,
        request: &ConversationRequest,
    ) -> Result<BoxStream<'static, ConversationResponse>> {
        let body = serde_json::to_value(request)?;
        let bytes = self.transport.post_stream(CONVERSATION_PATH, &body).await?;
        Ok(self.decoder.decode_stream(bytes).await)
    }

    async fn fetch_request(
        &self,
        request: &ConversationRequest,
    ) -> Result<Vec<ConversationResponse>> {
        let body = serde_json::to_value(request)?;
        let text = self.transport.post_text(CONVERSATION_PATH, &body).await?;
        let events = decode_body(&text)?;
        debug!(count = events.len(), "decoded batch conversation body");
        Ok(events)
    }
}

/// Decode a fully buffered response body as if it were a finite line stream.
///
/// Shares the streaming path's frame grammar: empty lines and the sentinel
/// line are skipped, everything else is a data frame.
pub(crate) fn decode_body(body: &str) -> Result<Vec<ConversationResponse>> {
    let mut events = Vec::new();
    for line in body.split('\n') {
        match frame::classify(line)? {
            Frame::Skip | Frame::Done => continue,
            Frame::Event(ev) => events.push(ev),
        }
    }
    Ok(events)
}
