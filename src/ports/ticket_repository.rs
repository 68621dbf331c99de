//! Ticket repository port.
//!
//! Append-only, durable store of escalated conversations.
//!
//! # Design
//!
//! - **Atomic create**: id assignment and field write happen in one
//!   operation; a failed create leaves nothing visible to `list`
//! - **Monotonic ids**: each create gets an id greater than every earlier one
//! - **Newest first**: `list` orders by id, descending

use async_trait::async_trait;

use crate::domain::foundation::TicketId;
use crate::domain::ticket::{NewTicket, Ticket};

/// Errors raised by ticket persistence.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to decode stored ticket: {0}")]
    Decode(String),
}

/// Repository port for support tickets.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Persists a new open ticket and returns its assigned id.
    ///
    /// # Errors
    ///
    /// - `Database` if the durable write did not complete; the ticket
    ///   must then be treated as not created
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, PersistenceError>;

    /// Returns at most `limit` tickets, most recently created first.
    async fn list(&self, limit: u32) -> Result<Vec<Ticket>, PersistenceError>;
}
