//! HTTP handlers for the chat endpoint.
//!
//! These handlers connect Axum routes to the message routing command.

use std::sync::Arc;

use axum::extract::{Json, State};

use crate::application::{RouteMessageCommand, RouteMessageHandler};
use crate::domain::foundation::ConversationId;

use super::dto::{ChatRequest, ChatResponse};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub route_message: Arc<RouteMessageHandler>,
}

impl ChatAppState {
    pub fn new(route_message: Arc<RouteMessageHandler>) -> Self {
        Self { route_message }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /chat - Route one user message and return the bot reply.
///
/// # Errors
/// - 400 Bad Request: `conversation_id` is present but blank or too long
/// - 503 Service Unavailable: the ticket could not be stored; the pending
///   contact request is kept so the user can resend their details
pub async fn post_chat(
    State(state): State<ChatAppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let conversation_id = match request.conversation_id.as_deref() {
        None => ConversationId::default_slot(),
        Some(raw) => ConversationId::new(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };

    let command = RouteMessageCommand::new(conversation_id, request.message);
    let result = state.route_message.handle(command).await?;

    Ok(Json(result.into()))
}
