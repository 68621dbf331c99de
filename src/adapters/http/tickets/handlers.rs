//! HTTP handlers for ticket endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};

use crate::application::{ListTicketsHandler, ListTicketsQuery};

use super::dto::{ListTicketsParams, TicketListResponse, TicketView};
use crate::adapters::http::error::ApiError;

/// Shared application state for ticket handlers.
#[derive(Clone)]
pub struct TicketsAppState {
    pub list_tickets: Arc<ListTicketsHandler>,
}

impl TicketsAppState {
    pub fn new(list_tickets: Arc<ListTicketsHandler>) -> Self {
        Self { list_tickets }
    }
}

/// GET /tickets - List the most recent tickets, newest first.
pub async fn list_tickets(
    State(state): State<TicketsAppState>,
    Query(params): Query<ListTicketsParams>,
) -> Result<Json<TicketListResponse>, ApiError> {
    let tickets = state
        .list_tickets
        .handle(ListTicketsQuery::new(params.limit))
        .await?;

    Ok(Json(TicketListResponse {
        tickets: tickets.into_iter().map(TicketView::from).collect(),
    }))
}
