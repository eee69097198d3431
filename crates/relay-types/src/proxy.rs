//! Wire types for the proxy's HTTP contract.
//!
//! - `POST /api/chat`: [`ChatRequest`] in, [`ChatReply`] or [`ErrorBody`] out
//! - `GET /api/health`: [`HealthStatus`] out
//!
//! Success and error bodies are mutually exclusive; the HTTP status carries
//! the failure class.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Success body for `POST /api/chat`.
///
/// `response` is optional on the decoding side: the client falls back to a
/// placeholder when a 2xx payload omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

/// Failure body shared by every proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Chat relay is running".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_without_response_decodes() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert!(reply.response.is_none());
    }

    #[test]
    fn test_chat_reply_serializes_response_only() {
        let json = serde_json::to_value(ChatReply::new("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "Hello" }));
    }

    #[test]
    fn test_chat_request_rejects_non_string_message() {
        let parsed = serde_json::from_str::<ChatRequest>(r#"{"message":123}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_health_status_ok() {
        let health = HealthStatus::ok();
        assert_eq!(health.status, "ok");
        assert!(!health.message.is_empty());
    }
}
