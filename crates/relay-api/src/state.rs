//! Application state shared by HTTP handlers.
//!
//! The credential is read once at startup and never changes. Handlers only
//! read from the state, so it is shared behind `Arc` without locking.

use std::sync::Arc;

use relay_core::llm::box_provider::BoxGenerationProvider;
use relay_core::proxy::ChatProxy;
use relay_infra::llm::gemini::GeminiProvider;
use relay_infra::secret::{EnvSecretProvider, PROVIDER_API_KEY_VAR};
use relay_types::config::RelayConfig;

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ChatProxy>,
}

impl AppState {
    /// Wire the proxy from configuration and the environment credential.
    ///
    /// A missing credential is not fatal: the server starts and answers each
    /// chat request with a configuration error.
    pub fn init(config: &RelayConfig) -> Self {
        let provider = match EnvSecretProvider::new().get(PROVIDER_API_KEY_VAR) {
            Some(api_key) => Some(BoxGenerationProvider::new(GeminiProvider::new(
                api_key,
                config.provider_base_url.clone(),
            ))),
            None => {
                tracing::warn!(
                    "{PROVIDER_API_KEY_VAR} is not set; chat requests will fail until it is configured"
                );
                None
            }
        };

        Self::with_proxy(ChatProxy::new(provider, config.model.clone()))
    }

    pub fn with_proxy(proxy: ChatProxy) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }
}
