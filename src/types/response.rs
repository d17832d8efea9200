//! Decoded response payloads.
//!
//! The decoder's contract is about framing, not semantic content: known
//! fields are typed but optional, and everything the service adds beyond
//! them is preserved in `extra` rather than rejected.

use serde::{Deserialize, Serialize};

/// One decoded event from the conversation stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ResponseMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The assistant message fragment carried by a stream event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: ResponseContent,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseContent {
    pub content_type: String,
    #[serde(default)]
    pub parts: Vec<String>,
}

/// Model catalog returned by the models endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One page of the caller's conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPage {
    #[serde(default)]
    pub items: Vec<ConversationSummary>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl ConversationResponse {
    /// The latest text fragment, if this event carries message content.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(|m| m.content.parts.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_preserved() {
        let resp: ConversationResponse = serde_json::from_str(r#"{"a":1}"#).unwrap();
        assert!(resp.message.is_none());
        assert_eq!(resp.extra["a"], 1);
    }

    #[test]
    fn message_fragment_round_trips() {
        let raw = r#"{
            "message": {
                "id": "m-1",
                "role": "assistant",
                "content": {"content_type": "text", "parts": ["Hello"]}
            },
            "conversation_id": "c-1"
        }"#;
        let resp: ConversationResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(resp.text(), Some("Hello"));
        assert_eq!(resp.conversation_id.as_deref(), Some("c-1"));
        assert_eq!(resp.message.unwrap().id, "m-1");
    }
}
