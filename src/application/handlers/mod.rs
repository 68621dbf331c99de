//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialogue;
pub mod ticket;

pub use dialogue::{
    RouteMessageCommand, RouteMessageError, RouteMessageHandler, RouteMessageResult, RouteOutcome,
};
pub use ticket::{ListTicketsHandler, ListTicketsQuery};
