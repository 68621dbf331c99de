//! Ticket query handlers.

mod list_tickets;

pub use list_tickets::{ListTicketsHandler, ListTicketsQuery};
