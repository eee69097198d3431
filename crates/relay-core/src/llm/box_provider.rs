//! BoxGenerationProvider -- object-safe dynamic dispatch wrapper for
//! GenerationProvider.
//!
//! 1. Define an object-safe `GenerationProviderDyn` trait with boxed futures
//! 2. Blanket-impl `GenerationProviderDyn` for all `T: GenerationProvider`
//! 3. `BoxGenerationProvider` wraps `Box<dyn GenerationProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use relay_types::error::ProviderError;
use relay_types::llm::{GenerationRequest, GenerationResponse};

use super::provider::GenerationProvider;

/// Object-safe version of [`GenerationProvider`] with boxed futures.
pub trait GenerationProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, ProviderError>> + Send + 'a>>;
}

impl<T: GenerationProvider> GenerationProviderDyn for T {
    fn name(&self) -> &str {
        GenerationProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, ProviderError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased generation provider.
///
/// Lets the proxy hold a real provider in production and a stub in tests
/// without becoming generic.
pub struct BoxGenerationProvider {
    inner: Box<dyn GenerationProviderDyn>,
}

impl BoxGenerationProvider {
    pub fn new<T: GenerationProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        self.inner.generate_boxed(request).await
    }
}

impl std::fmt::Debug for BoxGenerationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxGenerationProvider")
            .field("name", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    impl GenerationProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, ProviderError> {
            Ok(GenerationResponse {
                text: request.prompt.clone(),
                model: request.model.clone(),
                finish_reason: None,
            })
        }
    }

    #[tokio::test]
    async fn boxed_provider_delegates_to_inner() {
        let provider = BoxGenerationProvider::new(EchoProvider);
        assert_eq!(provider.name(), "echo");

        let request = GenerationRequest {
            model: "test-model".to_string(),
            prompt: "ping".to_string(),
        };
        let response = provider.generate(&request).await.unwrap();
        assert_eq!(response.text, "ping");
        assert_eq!(response.model, "test-model");
    }

    #[test]
    fn debug_shows_name_only() {
        let provider = BoxGenerationProvider::new(EchoProvider);
        let debug = format!("{provider:?}");
        assert!(debug.contains("echo"));
    }
}
