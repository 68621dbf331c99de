//! HTTP DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::application::RouteMessageResult;

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Message text as typed by the user.
    pub message: String,
    /// Conversation the message belongs to. The shared default slot is
    /// used when absent.
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Reply to `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub escalated: bool,
    #[serde(default)]
    pub ticket_id: Option<i64>,
}

impl From<RouteMessageResult> for ChatResponse {
    fn from(result: RouteMessageResult) -> Self {
        Self {
            reply: result.reply,
            escalated: result.escalated,
            ticket_id: result.ticket_id.map(|id| id.value()),
        }
    }
}
