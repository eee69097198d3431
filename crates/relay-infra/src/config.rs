//! Relay configuration loader.
//!
//! Reads [`RelayConfig`] from environment variables. Falls back to defaults
//! for anything missing or malformed, logging a warning in the latter case.
//!
//! | Variable             | Field               |
//! |----------------------|---------------------|
//! | `PORT`               | `port`              |
//! | `RELAY_MODEL`        | `model`             |
//! | `RELAY_PROVIDER_URL` | `provider_base_url` |

use relay_types::config::RelayConfig;

pub const PORT_VAR: &str = "PORT";
pub const MODEL_VAR: &str = "RELAY_MODEL";
pub const PROVIDER_URL_VAR: &str = "RELAY_PROVIDER_URL";

/// Load configuration from the process environment.
pub fn load_config() -> RelayConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_config_from<F>(lookup: F) -> RelayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = RelayConfig::default();
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(raw) = non_blank(PORT_VAR) {
        match raw.trim().parse::<u16>() {
            Ok(port) => config.port = port,
            Err(err) => {
                tracing::warn!("Invalid {PORT_VAR} value '{raw}': {err}, using {}", config.port);
            }
        }
    }

    if let Some(model) = non_blank(MODEL_VAR) {
        config.model = model.trim().to_string();
    }

    if let Some(url) = non_blank(PROVIDER_URL_VAR) {
        config.provider_base_url = url.trim().to_string();
    }

    config
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use relay_types::config::{DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_PROVIDER_URL};

    use super::*;

    fn load(vars: &[(&str, &str)]) -> RelayConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_returns_defaults() {
        let config = load(&[]);
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("PORT", "8080"),
            ("RELAY_MODEL", "gemini-2.5-flash"),
            ("RELAY_PROVIDER_URL", "http://localhost:9000"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.provider_base_url, "http://localhost:9000");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        for raw in ["not-a-port", "70000", "-1"] {
            assert_eq!(load(&[("PORT", raw)]).port, DEFAULT_PORT, "PORT={raw}");
        }
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = load(&[("PORT", " "), ("RELAY_MODEL", ""), ("RELAY_PROVIDER_URL", "  ")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.provider_base_url, DEFAULT_PROVIDER_URL);
    }
}
