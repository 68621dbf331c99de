//! ListTicketsHandler - Query handler for recent tickets.

use std::sync::Arc;

use crate::domain::ticket::Ticket;
use crate::ports::{PersistenceError, TicketRepository};

/// Query for the most recent tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicketsQuery {
    /// Maximum number of tickets to return.
    pub limit: u32,
}

impl ListTicketsQuery {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 50;
    /// Largest page a single query may request.
    pub const MAX_LIMIT: u32 = 500;

    /// Builds a query, applying the default and the cap.
    pub fn new(limit: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).min(Self::MAX_LIMIT),
        }
    }
}

impl Default for ListTicketsQuery {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Handler listing tickets newest first.
pub struct ListTicketsHandler {
    tickets: Arc<dyn TicketRepository>,
}

impl ListTicketsHandler {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    pub async fn handle(&self, query: ListTicketsQuery) -> Result<Vec<Ticket>, PersistenceError> {
        self.tickets.list(query.limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTicketRepository;
    use crate::domain::ticket::NewTicket;

    #[test]
    fn default_limit_is_50() {
        assert_eq!(ListTicketsQuery::default().limit, 50);
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(ListTicketsQuery::new(Some(10_000)).limit, ListTicketsQuery::MAX_LIMIT);
        assert_eq!(ListTicketsQuery::new(Some(7)).limit, 7);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let repo = InMemoryTicketRepository::new();
        for i in 1..=5 {
            repo.create(&NewTicket::new(None, None, format!("msg {}", i)).unwrap())
                .await
                .unwrap();
        }
        let handler = ListTicketsHandler::new(Arc::new(repo));

        let tickets = handler.handle(ListTicketsQuery::new(Some(2))).await.unwrap();

        let ids: Vec<i64> = tickets.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![5, 4]);
    }
}
