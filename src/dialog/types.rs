//! Wire types for the message endpoint.

use serde::{Deserialize, Serialize};

/// User text for a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInput {
    pub text: String,
}

/// Body of a `message` call.
///
/// The initial probe carries neither input nor context and serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl MessageRequest {
    /// Opening request of a session.
    pub fn initial() -> Self {
        Self::default()
    }

    /// A user turn that echoes back the current context.
    pub fn user_turn(text: impl Into<String>, context: serde_json::Value) -> Self {
        Self {
            input: Some(MessageInput { text: text.into() }),
            context: Some(context),
        }
    }

    /// The user text, if any.
    pub fn text(&self) -> Option<&str> {
        self.input.as_ref().map(|i| i.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_request_is_empty_object() {
        let body = serde_json::to_value(MessageRequest::initial()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_user_turn_carries_text_and_context() {
        let req = MessageRequest::user_turn("hello", json!({"conversation_id": "abc"}));
        assert_eq!(req.text(), Some("hello"));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({"input": {"text": "hello"}, "context": {"conversation_id": "abc"}})
        );
    }
}
