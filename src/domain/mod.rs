//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `dialogue` - Normalization, escalation detection, FAQ matching,
//!   contact extraction and the conversation states
//! - `ticket` - Support tickets opened for escalated conversations

pub mod dialogue;
pub mod foundation;
pub mod ticket;
