//! Axum routes for ticket endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_tickets, TicketsAppState};

/// Creates the ticket router.
///
/// REST Endpoints:
/// - GET /tickets?limit=N - Recent tickets, newest first
pub fn tickets_router() -> Router<TicketsAppState> {
    Router::new().route("/tickets", get(list_tickets))
}
