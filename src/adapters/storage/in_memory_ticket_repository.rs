//! In-Memory Ticket Repository
//!
//! Useful for testing and development. Not durable.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{TicketId, Timestamp};
use crate::domain::ticket::{NewTicket, Ticket};
use crate::ports::{PersistenceError, TicketRepository};

#[derive(Debug, Default)]
struct TicketTable {
    next_id: i64,
    rows: Vec<Ticket>,
}

/// In-memory ticket storage with sequential ids starting at 1
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketRepository {
    table: Arc<RwLock<TicketTable>>,
}

impl InMemoryTicketRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tickets
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, PersistenceError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = TicketId::from_raw(table.next_id);
        table.rows.push(Ticket::from_new(id, Timestamp::now(), ticket));
        Ok(id)
    }

    async fn list(&self, limit: u32) -> Result<Vec<Ticket>, PersistenceError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
