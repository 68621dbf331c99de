//! Dialogue command handlers.
//!
//! Routes inbound chat messages through the conversation state machine.

mod route_message;

pub use route_message::{
    RouteMessageCommand, RouteMessageError, RouteMessageHandler, RouteMessageResult, RouteOutcome,
};
