//! Outbound conversation request types.
//!
//! Wire shape: snake_case keys, `None` fields omitted from serialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One outbound conversation turn.
///
/// Every constructor generates a fresh `parent_message_id`; reusing one
/// across requests is a caller error this type does not guard against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRequest {
    pub action: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub parent_message_id: String,
    pub model: String,
}

/// A single chat message inside a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: String,
    pub content: Content,
}

/// Message content: a content type tag plus ordered text fragments.
///
/// This client always produces `content_type = "text"` with exactly one
/// fragment equal to the caller's input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub content_type: String,
    pub parts: Vec<String>,
}

impl ConversationRequest {
    /// Build the request for a new conversation from plain input text.
    ///
    /// No validation is performed on the content; empty input is allowed.
    pub fn new_conversation(input_text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            action: "next".to_string(),
            messages: vec![Message::user(input_text)],
            conversation_id: None,
            parent_message_id: Uuid::new_v4().to_string(),
            model: model.into(),
        }
    }

    /// Build a follow-up turn in an existing conversation.
    ///
    /// `parent_message_id` is the id of the message being replied to, as
    /// reported by an earlier response.
    pub fn continuation(
        input_text: impl Into<String>,
        conversation_id: impl Into<String>,
        parent_message_id: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            action: "next".to_string(),
            messages: vec![Message::user(input_text)],
            conversation_id: Some(conversation_id.into()),
            parent_message_id: parent_message_id.into(),
            model: model.into(),
        }
    }
}

impl Message {
    /// A user message wrapping the text as the sole content part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: "user".to_string(),
            content: Content {
                content_type: "text".to_string(),
                parts: vec![text.into()],
            },
        }
    }
}
