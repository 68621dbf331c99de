//! Ticket module - durable records of escalated conversations.

mod status;
#[allow(clippy::module_inception)]
mod ticket;

pub use status::TicketStatus;
pub use ticket::{NewTicket, Ticket};
