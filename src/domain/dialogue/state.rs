//! Per-conversation dialogue state.

use serde::{Deserialize, Serialize};

/// Contact collection in progress: the message that opened it is kept
/// until the next turn files it as a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingContact {
    pub message: String,
}

impl PendingContact {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The two states of a conversation.
///
/// There is no stored enum: a conversation is `AwaitingContact` exactly
/// while the state store holds a `PendingContact` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    AwaitingIntent,
    AwaitingContact,
}

impl DialogueState {
    pub fn of(pending: Option<&PendingContact>) -> Self {
        match pending {
            Some(_) => DialogueState::AwaitingContact,
            None => DialogueState::AwaitingIntent,
        }
    }
}
