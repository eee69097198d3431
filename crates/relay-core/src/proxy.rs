//! Stateless chat proxy.
//!
//! Validates a `POST /api/chat` body, forwards the message to the
//! generation provider as the entire prompt, and hands back the text. Each
//! call is independent: no system prompt, no history, no retries.

use relay_types::error::ChatError;
use relay_types::llm::GenerationRequest;
use serde_json::Value;

use crate::llm::box_provider::BoxGenerationProvider;

/// Translates text-in/text-out requests into provider calls.
///
/// `provider` is `None` when no credential was configured at startup; every
/// chat request then fails with [`ChatError::Configuration`].
#[derive(Debug)]
pub struct ChatProxy {
    provider: Option<BoxGenerationProvider>,
    model: String,
}

impl ChatProxy {
    pub fn new(provider: Option<BoxGenerationProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Whether a provider credential was available at startup.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name())
    }

    /// Handle one chat request body.
    ///
    /// The body is taken as raw JSON so a missing or non-string `message`
    /// surfaces as a validation error instead of a deserializer rejection.
    pub async fn handle_chat(&self, body: &Value) -> Result<String, ChatError> {
        let message = extract_message(body)?;

        let provider = self.provider.as_ref().ok_or_else(|| {
            ChatError::Configuration("GEMINI_API_KEY is not configured".to_string())
        })?;

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: message.to_string(),
        };

        tracing::debug!(
            provider = provider.name(),
            model = %self.model,
            prompt_len = message.len(),
            "forwarding chat message"
        );

        let response = provider.generate(&request).await?;

        tracing::info!(
            provider = provider.name(),
            reply_len = response.text.len(),
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "chat reply generated"
        );

        Ok(response.text)
    }
}

/// Pull `message` out of the body, requiring it to be a JSON string.
fn extract_message(body: &Value) -> Result<&str, ChatError> {
    match body.get("message") {
        Some(Value::String(message)) => Ok(message.as_str()),
        Some(_) => Err(ChatError::Validation(
            "Message must be a string".to_string(),
        )),
        None => Err(ChatError::Validation("Message is required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use relay_types::error::ProviderError;
    use relay_types::llm::GenerationResponse;
    use serde_json::json;

    use super::*;
    use crate::llm::provider::GenerationProvider;

    /// Records every prompt and replies with a fixed text or failure.
    struct StubProvider {
        reply: Result<String, u16>,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<std::sync::Mutex<Option<String>>>,
    }

    impl StubProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
                last_prompt: Arc::new(std::sync::Mutex::new(None)),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: Arc::new(AtomicUsize::new(0)),
                last_prompt: Arc::new(std::sync::Mutex::new(None)),
            }
        }
    }

    impl GenerationProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(request.prompt.clone());
            match &self.reply {
                Ok(text) => Ok(GenerationResponse {
                    text: text.clone(),
                    model: request.model.clone(),
                    finish_reason: Some("STOP".to_string()),
                }),
                Err(status) => Err(ProviderError::Status {
                    status: *status,
                    body: "quota exceeded for key abc".to_string(),
                }),
            }
        }
    }

    fn proxy_with(stub: StubProvider) -> ChatProxy {
        ChatProxy::new(Some(BoxGenerationProvider::new(stub)), "gemini-test")
    }

    #[tokio::test]
    async fn missing_message_is_validation_error() {
        let proxy = proxy_with(StubProvider::replying("unused"));
        let err = proxy.handle_chat(&json!({})).await.unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn non_string_message_is_validation_error() {
        let proxy = proxy_with(StubProvider::replying("unused"));
        for body in [json!({ "message": 123 }), json!({ "message": null }), json!([])] {
            let err = proxy.handle_chat(&body).await.unwrap_err();
            assert!(matches!(err, ChatError::Validation(_)), "body: {body}");
        }
    }

    #[tokio::test]
    async fn validation_does_not_call_provider() {
        let stub = StubProvider::replying("unused");
        let calls = stub.calls.clone();
        let proxy = proxy_with(stub);

        let _ = proxy.handle_chat(&json!({ "message": 1 })).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_credential_is_configuration_error() {
        let proxy = ChatProxy::new(None, "gemini-test");
        assert!(!proxy.is_configured());
        assert!(proxy.provider_name().is_none());

        let err = proxy
            .handle_chat(&json!({ "message": "anything" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Configuration(_)));
    }

    #[tokio::test]
    async fn valid_message_returns_provider_text() {
        let stub = StubProvider::replying("Hello");
        let last_prompt = stub.last_prompt.clone();
        let calls = stub.calls.clone();
        let proxy = proxy_with(stub);

        let reply = proxy.handle_chat(&json!({ "message": "Hi" })).await.unwrap();
        assert_eq!(reply, "Hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_prompt.lock().unwrap().as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn empty_string_message_is_forwarded() {
        let stub = StubProvider::replying("ok");
        let calls = stub.calls.clone();
        let proxy = proxy_with(stub);

        assert!(proxy.handle_chat(&json!({ "message": "" })).await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_failure_is_single_attempt() {
        let stub = StubProvider::failing(429);
        let calls = stub.calls.clone();
        let proxy = proxy_with(stub);

        let err = proxy
            .handle_chat(&json!({ "message": "Hi" }))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChatError::Provider(ProviderError::Status { status: 429, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
