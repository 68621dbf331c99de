//! HTTP adapter for ticket endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListTicketsParams, TicketListResponse, TicketView};
pub use handlers::{list_tickets, TicketsAppState};
pub use routes::tickets_router;
