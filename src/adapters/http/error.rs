//! API error type shared by the HTTP adapters.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::application::RouteMessageError;
use crate::ports::PersistenceError;

/// Standard error response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Whether resending the same request may succeed.
    pub retryable: bool,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            retryable: false,
        }
    }

    pub fn ticket_persistence_failed() -> Self {
        Self {
            code: "TICKET_PERSISTENCE_FAILED".to_string(),
            message: "Não foi possível registrar seu atendimento agora. Por favor, envie seus dados novamente.".to_string(),
            retryable: true,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
            retryable: true,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            retryable: false,
        }
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    TicketPersistence(String),
    Unavailable(String),
    Internal(String),
}

impl From<RouteMessageError> for ApiError {
    fn from(err: RouteMessageError) -> Self {
        match err {
            RouteMessageError::TicketPersistence(e) => ApiError::TicketPersistence(e.to_string()),
            RouteMessageError::StateStore(e) => ApiError::Unavailable(e.to_string()),
            RouteMessageError::InvalidTicket(e) => ApiError::Internal(e.to_string()),
            RouteMessageError::TaskFailed(e) => ApiError::Internal(e),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        ApiError::Unavailable(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::TicketPersistence(msg) => {
                tracing::error!("Ticket persistence failed: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::ticket_persistence_failed(),
                )
            }
            ApiError::Unavailable(msg) => {
                tracing::error!("Dependency unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::unavailable("Service temporarily unavailable"),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
