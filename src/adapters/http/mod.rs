//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own adapter with DTOs, handlers and routes.
//! [`app_router`] merges them and applies the shared middleware stack.

pub mod chat;
pub mod error;
pub mod tickets;

pub use chat::{chat_router, ChatAppState};
pub use error::{ApiError, ErrorResponse};
pub use tickets::{tickets_router, TicketsAppState};

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use http::HeaderValue;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router.
///
/// Routes:
/// - POST /chat
/// - GET /tickets
/// - GET /health
pub fn app_router(chat: ChatAppState, tickets: TicketsAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(chat_router().with_state(chat))
        .merge(tickets_router().with_state(tickets))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

/// GET /health - Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any origin is allowed when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
