//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change conversation state or open tickets; queries read tickets.

pub mod handlers;

pub use handlers::{
    ListTicketsHandler, ListTicketsQuery, RouteMessageCommand, RouteMessageError,
    RouteMessageHandler, RouteMessageResult, RouteOutcome,
};
