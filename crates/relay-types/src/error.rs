use thiserror::Error;

/// Errors from the generation provider.
///
/// These carry operator-facing detail. They are logged by the proxy and never
/// forwarded to HTTP clients.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("prompt blocked by provider: {0}")]
    Blocked(String),

    #[error("provider returned no text")]
    EmptyResponse,
}

/// Errors from handling one `POST /api/chat` request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request body is missing `message` or it is not a string.
    #[error("{0}")]
    Validation(String),

    /// The provider credential is not configured.
    #[error("{0}")]
    Configuration(String),

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Errors reaching the proxy from the client side.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),
}
