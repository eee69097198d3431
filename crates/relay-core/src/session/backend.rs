//! ChatBackend trait: the session's view of the proxy service.

use relay_types::error::TransportError;
use relay_types::proxy::ChatReply;

/// One `POST /api/chat` round trip.
///
/// Implementations map every failure (transport error, non-2xx status,
/// malformed payload) to [`TransportError`]. The HTTP implementation lives
/// in relay-infra (`HttpChatBackend`).
pub trait ChatBackend: Send + Sync {
    fn send(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<ChatReply, TransportError>> + Send;
}
