//! Runtime configuration types for the relay server.
//!
//! `RelayConfig` is assembled from environment variables at startup. All
//! fields have defaults; the provider credential is not part of
//! it and is resolved separately as a secret.

use serde::{Deserialize, Serialize};

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Default generation model when `RELAY_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default provider endpoint when `RELAY_PROVIDER_URL` is unset.
pub const DEFAULT_PROVIDER_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation provider (overridable for tests and proxies).
    #[serde(default = "default_provider_url")]
    pub provider_base_url: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            model: default_model(),
            provider_base_url: default_provider_url(),
        }
    }
}
