//! In-Memory Conversation State Store
//!
//! Keeps pending contact state in a process-wide map. State is lost on
//! restart, which is acceptable for a two-turn exchange.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::PendingContact;
use crate::domain::foundation::ConversationId;
use crate::ports::{ConversationStateStore, StateStoreError};

/// In-memory store keyed by conversation.
///
/// Every operation takes the lock once, so `take_and_remove` is atomic
/// with respect to every other call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStateStore {
    states: Arc<RwLock<HashMap<ConversationId, PendingContact>>>,
}

impl InMemoryConversationStateStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations currently awaiting contact
    pub async fn pending_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl ConversationStateStore for InMemoryConversationStateStore {
    async fn get(&self, id: &ConversationId) -> Result<Option<PendingContact>, StateStoreError> {
        Ok(self.states.read().await.get(id).cloned())
    }

    async fn put(&self, id: &ConversationId, state: PendingContact) -> Result<(), StateStoreError> {
        self.states.write().await.insert(id.clone(), state);
        Ok(())
    }

    async fn take_and_remove(
        &self,
        id: &ConversationId,
    ) -> Result<Option<PendingContact>, StateStoreError> {
        Ok(self.states.write().await.remove(id))
    }

    async fn restore(
        &self,
        id: &ConversationId,
        state: PendingContact,
    ) -> Result<bool, StateStoreError> {
        match self.states.write().await.entry(id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(state);
                Ok(true)
            }
        }
    }
}
