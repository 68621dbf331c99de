//! Conversation State Store Port - per-conversation pending contact state.
//!
//! Holds, for each conversation, the message that opened a
//! contact-collection turn. Absence of an entry means the conversation
//! is awaiting a fresh intent.

use async_trait::async_trait;

use crate::domain::dialogue::PendingContact;
use crate::domain::foundation::ConversationId;

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("State store unavailable: {0}")]
    Unavailable(String),
}

/// Port for per-conversation dialogue state.
///
/// Implementations must make `take_and_remove` atomic: of two concurrent
/// calls for the same conversation, at most one observes the entry.
#[async_trait]
pub trait ConversationStateStore: Send + Sync {
    /// Returns the pending contact for a conversation, if any.
    async fn get(&self, id: &ConversationId) -> Result<Option<PendingContact>, StateStoreError>;

    /// Stores (or replaces) the pending contact for a conversation.
    async fn put(&self, id: &ConversationId, state: PendingContact) -> Result<(), StateStoreError>;

    /// Atomically reads and deletes the pending contact.
    async fn take_and_remove(
        &self,
        id: &ConversationId,
    ) -> Result<Option<PendingContact>, StateStoreError>;

    /// Stores `state` only if the conversation has no entry.
    ///
    /// Returns `true` if it was stored. Used to hand a consumed entry back
    /// without overwriting one opened in the meantime.
    async fn restore(&self, id: &ConversationId, state: PendingContact)
        -> Result<bool, StateStoreError>;
}
