//! Session state machine for one client's conversation.
//!
//! Owns the append-only message log and the `pending` flag. A submission is
//! split into two steps so a front end can keep drawing while the request is
//! in flight:
//!
//! 1. [`SessionManager::submit`] appends the user message, flips `pending`
//!    and hands back a [`PendingTurn`] token.
//! 2. [`SessionManager::complete`] consumes the token with the backend's
//!    result, appends the bot (or error placeholder) message and clears
//!    `pending`.
//!
//! Only one token can exist at a time: `submit` is a no-op while `pending`
//! is set. [`SessionManager::send`] runs both steps against a [`ChatBackend`].

use relay_types::chat::{Message, SessionState};
use relay_types::error::TransportError;
use relay_types::event::SessionEvent;
use relay_types::proxy::ChatReply;

use super::backend::ChatBackend;
use crate::event::bus::EventBus;

/// Shown when a successful reply has a missing or empty `response`.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response";

/// Shown for any failed turn. Backend error detail is never displayed.
pub const ERROR_REPLY: &str = "Sorry, something went wrong. Please try again.";

const EVENT_CAPACITY: usize = 64;

/// Why a submission was not dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text was empty or whitespace-only.
    Blank,
    /// A request is already in flight.
    Pending,
}

/// Result of [`SessionManager::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    Dispatched(PendingTurn),
}

/// Token for the single in-flight request of a session.
///
/// Created only by [`SessionManager::submit`]; consumed by
/// [`SessionManager::complete`].
#[derive(Debug)]
#[must_use = "a pending turn leaves the session pending until completed"]
pub struct PendingTurn {
    turn: u64,
    message: String,
}

impl PendingTurn {
    /// The text to send to the proxy.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Client-side coordinator for request/response cycles.
pub struct SessionManager {
    state: SessionState,
    input: String,
    events: EventBus,
    next_turn: u64,
    in_flight: Option<u64>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
            input: String::new(),
            events: EventBus::new(EVENT_CAPACITY),
            next_turn: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Start a turn.
    ///
    /// Blank text or an in-flight request leaves the state untouched and
    /// publishes nothing. Otherwise the user message is appended, the input
    /// buffer cleared and `pending` set before the token is returned.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::Blank);
        }
        if self.state.pending {
            tracing::debug!("submission ignored: request already in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Pending);
        }

        let turn = self.next_turn;
        self.next_turn += 1;

        self.append(Message::user(text));
        self.input.clear();
        self.set_pending(true);
        self.in_flight = Some(turn);

        tracing::debug!(turn, len = text.len(), "turn dispatched");

        SubmitOutcome::Dispatched(PendingTurn {
            turn,
            message: text.to_string(),
        })
    }

    /// Finish a turn with the backend's result.
    ///
    /// Returns the appended bot message, or `None` if the token does not
    /// belong to this session's in-flight turn.
    pub fn complete(
        &mut self,
        turn: PendingTurn,
        result: Result<ChatReply, TransportError>,
    ) -> Option<&Message> {
        if self.in_flight != Some(turn.turn) {
            tracing::warn!(turn = turn.turn, "ignoring completion for unknown turn");
            return None;
        }

        let text = match result {
            Ok(reply) => reply
                .response
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()),
            Err(e) => {
                tracing::warn!(turn = turn.turn, error = %e, "chat request failed");
                ERROR_REPLY.to_string()
            }
        };

        self.append(Message::bot(text));
        self.in_flight = None;
        self.set_pending(false);

        self.state.latest()
    }

    /// Submit `text` and await the backend's reply.
    ///
    /// Returns the bot message, or `None` if the submission was ignored.
    pub async fn send<B: ChatBackend>(&mut self, text: &str, backend: &B) -> Option<&Message> {
        let turn = match self.submit(text) {
            SubmitOutcome::Dispatched(turn) => turn,
            SubmitOutcome::Ignored(_) => return None,
        };
        let result = backend.send(turn.message()).await;
        self.complete(turn, result)
    }

    fn append(&mut self, message: Message) {
        self.state.messages.push(message.clone());
        self.events.publish(SessionEvent::MessageAppended { message });
    }

    fn set_pending(&mut self, pending: bool) {
        self.state.pending = pending;
        self.events.publish(SessionEvent::PendingChanged { pending });
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
