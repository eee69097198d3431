//! Application error type mapping to HTTP status codes and the `{error}` body.
//!
//! Provider and configuration detail is logged here and replaced by a fixed
//! client-facing message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use relay_types::error::ChatError;
use relay_types::proxy::ErrorBody;

/// Body text for any provider failure.
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to get response from AI";

/// Body text when the provider credential is missing.
pub const CONFIGURATION_FAILURE_MESSAGE: &str = "Server is missing its AI provider API key";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat request errors.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Chat(ChatError::Validation(msg.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::Validation(msg)) => {
                tracing::debug!(reason = %msg, "rejected chat request");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Chat(ChatError::Configuration(msg)) => {
                tracing::error!(reason = %msg, "chat request failed: configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CONFIGURATION_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Chat(ChatError::Provider(e)) => {
                tracing::error!(error = %e, "chat request failed: provider error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROVIDER_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
