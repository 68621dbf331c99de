//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationStateStore` - per-conversation pending contact state
//! - `TicketRepository` - durable, append-only ticket storage
//! - `KnowledgeBaseSource` - ordered FAQ entries loaded at startup

mod conversation_state_store;
mod knowledge_base;
mod ticket_repository;

pub use conversation_state_store::{ConversationStateStore, StateStoreError};
pub use knowledge_base::{KnowledgeBaseError, KnowledgeBaseSource};
pub use ticket_repository::{PersistenceError, TicketRepository};
