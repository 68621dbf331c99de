//! Axum routes for the chat endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{post_chat, ChatAppState};

/// Creates the chat router.
///
/// REST Endpoints:
/// - POST /chat - Route a user message through the dialogue state machine
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().route("/chat", post(post_chat))
}
