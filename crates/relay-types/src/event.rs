//! Session state-change events.
//!
//! Published by the session manager on every transition so a front end can
//! redraw and scroll to the newest message.

use serde::{Deserialize, Serialize};

use crate::chat::Message;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the log.
    MessageAppended { message: Message },

    /// The in-flight flag changed.
    PendingChanged { pending: bool },
}
