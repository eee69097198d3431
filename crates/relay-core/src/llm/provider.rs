//! GenerationProvider trait definition.
//!
//! This is the core abstraction that every text-generation backend
//! implements. Uses RPITIT for `generate`; `BoxGenerationProvider` adds the
//! object-safe layer.

use relay_types::error::ProviderError;
use relay_types::llm::{GenerationRequest, GenerationResponse};

/// Trait for text-generation backends (Gemini, test stubs, ...).
///
/// Implementations live in relay-infra (e.g., `GeminiProvider`).
pub trait GenerationProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one prompt and receive the full generated text.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, ProviderError>> + Send;
}
