//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"chat gemini-1.5-flash"`).

/// The name of the operation being performed (e.g., "chat").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "gemini").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

/// The model ID requested.
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// Operation name for a single-prompt chat call.
pub const OPERATION_CHAT: &str = "chat";

/// Build a span name following the `"{operation} {model}"` convention.
pub fn span_name(operation: &str, model: &str) -> String {
    format!("{operation} {model}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_name_joins_operation_and_model() {
        assert_eq!(span_name(OPERATION_CHAT, "gemini-1.5-flash"), "chat gemini-1.5-flash");
    }

    #[test]
    fn attribute_names_use_gen_ai_namespace() {
        for attr in [GEN_AI_OPERATION_NAME, GEN_AI_PROVIDER_NAME, GEN_AI_REQUEST_MODEL] {
            assert!(attr.starts_with("gen_ai."));
        }
    }
}
