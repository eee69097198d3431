//! GeminiProvider -- concrete [`GenerationProvider`] for Google Gemini.
//!
//! Sends single-prompt requests to
//! `/v1beta/models/{model}:generateContent` and extracts the first
//! candidate's text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the request header. It never appears in URLs or logs.

use secrecy::{ExposeSecret, SecretString};

use relay_core::llm::provider::GenerationProvider;
use relay_types::error::ProviderError;
use relay_types::llm::{GenerationRequest, GenerationResponse};

use super::types::{GeminiRequest, GeminiResponse};

/// Google Gemini generation provider.
///
/// No request timeout is configured: a hung call resolves only when the
/// underlying transport gives up.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    /// Header carrying the API key.
    const API_KEY_HEADER: &'static str = "x-goog-api-key";

    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

// GeminiProvider does not derive Debug; the key stays out of formatted output.

impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let body = GeminiRequest::single_prompt(&request.prompt);

        let response = self
            .client
            .post(self.url(&request.model))
            .header(Self::API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let gemini: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = match gemini.first_candidate_text() {
            Some(text) if !text.is_empty() => text,
            _ => {
                if let Some(reason) = gemini
                    .prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.clone())
                {
                    return Err(ProviderError::Blocked(reason));
                }
                return Err(ProviderError::EmptyResponse);
            }
        };

        Ok(GenerationResponse {
            text,
            model: gemini
                .model_version
                .clone()
                .unwrap_or_else(|| request.model.clone()),
            finish_reason: gemini
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
        })
    }
}
