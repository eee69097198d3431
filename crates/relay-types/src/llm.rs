//! Provider-agnostic generation request/response types.
//!
//! The proxy never attaches a system prompt or conversation history, so a
//! request is just the model name and a single prompt.

use serde::{Deserialize, Serialize};

/// A single-shot generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
}

/// Text produced by a provider for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}
