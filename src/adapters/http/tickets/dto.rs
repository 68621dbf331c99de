//! HTTP DTOs for the ticket listing endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::ticket::{Ticket, TicketStatus};

/// Query string of `GET /tickets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTicketsParams {
    pub limit: Option<u32>,
}

/// One ticket as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketView {
    pub id: i64,
    /// ISO-8601 UTC creation time.
    pub created_at: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub status: TicketStatus,
}

impl From<Ticket> for TicketView {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id.value(),
            created_at: ticket.created_at.to_iso8601(),
            name: ticket.name,
            phone: ticket.phone,
            message: ticket.message,
            status: ticket.status,
        }
    }
}

/// Reply to `GET /tickets`, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketView>,
}
