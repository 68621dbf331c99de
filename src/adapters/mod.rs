//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints (`/chat`, `/tickets`, `/health`)
//! - `sqlite` - Durable ticket storage
//! - `storage` - In-memory state/tickets and the file-backed knowledge base

pub mod http;
pub mod sqlite;
pub mod storage;

pub use http::{app_router, ChatAppState, TicketsAppState};
pub use sqlite::SqliteTicketRepository;
pub use storage::{FileKnowledgeBase, InMemoryConversationStateStore, InMemoryTicketRepository};
