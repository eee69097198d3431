//! Environment variable secret provider.
//!
//! A read-only provider that checks environment variables. Values are
//! wrapped in [`SecretString`] as soon as they are read, so they never reach
//! `Debug` output or logs.

use secrecy::SecretString;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `key` in the process environment.
    ///
    /// Unset, blank, and non-Unicode values all count as "not configured".
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) => wrap_secret(val),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "secret env var is not valid unicode, ignoring");
                None
            }
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_secret(value: String) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::from(trimmed.to_string()))
    }
}
