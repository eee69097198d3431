//! Secret lookup.
//!
//! - `env`: Environment variable provider (read-only)

pub mod env;

pub use env::EnvSecretProvider;

/// Environment variable holding the generation provider credential.
pub const PROVIDER_API_KEY_VAR: &str = "GEMINI_API_KEY";
