//! HttpChatBackend -- [`ChatBackend`] over the relay's HTTP contract.
//!
//! Issues exactly one `POST {server}/api/chat` per call and reduces every
//! failure to a [`TransportError`]. The server's `{error}` text is not read:
//! sessions show their own fixed error reply.

use relay_core::session::backend::ChatBackend;
use relay_types::error::TransportError;
use relay_types::proxy::{ChatReply, ChatRequest};

pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    /// `server` is the relay base URL, e.g. `http://localhost:5000`.
    pub fn new(server: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", server.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatBackend for HttpChatBackend {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Payload(e.to_string()))
    }
}
