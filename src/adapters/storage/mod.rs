//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **InMemoryConversationStateStore** - Pending contact state in memory
//! - **InMemoryTicketRepository** - Tickets in memory (testing/development)
//! - **FileKnowledgeBase** - FAQ entries from a JSON/YAML file
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKnowledgeBase, InMemoryConversationStateStore};
//!
//! let states = InMemoryConversationStateStore::new();
//! let entries = FileKnowledgeBase::new("faq.json").load()?;
//! ```

mod file_knowledge_base;
mod in_memory_state_store;
mod in_memory_ticket_repository;

pub use file_knowledge_base::FileKnowledgeBase;
pub use in_memory_state_store::InMemoryConversationStateStore;
pub use in_memory_ticket_repository::InMemoryTicketRepository;
