//! Integration tests for the chat and ticket HTTP endpoints.
//!
//! These tests drive the full router over an in-memory SQLite database:
//! 1. Escalation and fallback flows open tickets
//! 2. Tickets are listed newest first
//! 3. Conversations are isolated from each other
//! 4. A failed ticket write keeps the pending request and returns 503

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use farmabot::adapters::http::{app_router, ChatAppState, TicketsAppState};
use farmabot::adapters::sqlite::{self, SqliteTicketRepository};
use farmabot::adapters::storage::InMemoryConversationStateStore;
use farmabot::application::{ListTicketsHandler, RouteMessageHandler};
use farmabot::config::{DatabaseConfig, ServerConfig};
use farmabot::domain::dialogue::{replies, EscalationDetector, FaqEntry, FaqMatcher, IntentRouter};
use farmabot::domain::foundation::TicketId;
use farmabot::domain::ticket::{NewTicket, Ticket};
use farmabot::ports::{PersistenceError, TicketRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Ticket repository whose writes always fail.
struct FailingTicketRepository;

#[async_trait]
impl TicketRepository for FailingTicketRepository {
    async fn create(&self, _ticket: &NewTicket) -> Result<TicketId, PersistenceError> {
        Err(PersistenceError::Database("database is locked".to_string()))
    }

    async fn list(&self, _limit: u32) -> Result<Vec<Ticket>, PersistenceError> {
        Ok(Vec::new())
    }
}

fn intent_router() -> Arc<IntentRouter> {
    let faq = FaqMatcher::new(vec![
        FaqEntry::new(
            vec!["horario", "funcionamento"],
            Some("Funcionamos de segunda a sábado, das 8h às 22h.".to_string()),
        ),
        FaqEntry::new(
            vec!["entrega", "delivery"],
            Some("Fazemos entregas em toda a cidade.".to_string()),
        ),
    ]);
    Arc::new(IntentRouter::new(EscalationDetector::default(), faq))
}

fn build_app(tickets: Arc<dyn TicketRepository>) -> Router {
    let route_message = RouteMessageHandler::new(
        Arc::new(InMemoryConversationStateStore::new()),
        tickets.clone(),
        intent_router(),
    );
    app_router(
        ChatAppState::new(Arc::new(route_message)),
        TicketsAppState::new(Arc::new(ListTicketsHandler::new(tickets))),
        &ServerConfig::default(),
    )
}

async fn sqlite_app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    };
    let pool = sqlite::connect(&config).await.unwrap();
    sqlite::run_migrations(&pool).await.unwrap();
    build_app(Arc::new(SqliteTicketRepository::new(pool)))
}

async fn chat(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get_tickets(app: &Router, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/tickets{}", query))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Flows
// =============================================================================

#[tokio::test]
async fn escalation_then_contact_creates_ticket() {
    let app = sqlite_app().await;

    let (status, first) = chat(
        &app,
        json!({"message": "Quero falar com atendente", "conversation_id": "c1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["reply"], replies::ESCALATION_CONTACT_REQUEST);
    assert!(first["ticket_id"].is_null());

    let (status, second) = chat(
        &app,
        json!({"message": "Maria Silva (11) 99999-8888", "conversation_id": "c1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["escalated"], true);
    assert_eq!(second["ticket_id"], 1);
    assert!(second["reply"].as_str().unwrap().contains("#1"));

    let (_, listing) = get_tickets(&app, "").await;
    let ticket = &listing["tickets"][0];
    assert_eq!(ticket["id"], 1);
    assert_eq!(ticket["name"], "Maria Silva");
    assert_eq!(ticket["phone"], "11999998888");
    assert_eq!(ticket["message"], "Quero falar com atendente");
    assert_eq!(ticket["status"], "open");
}

#[tokio::test]
async fn unmatched_question_falls_back_to_contact_collection() {
    let app = sqlite_app().await;

    let (_, first) = chat(
        &app,
        json!({"message": "Vocês vendem ração para gatos?", "conversation_id": "c2"}),
    )
    .await;
    assert_eq!(first["reply"], replies::FALLBACK_CONTACT_REQUEST);
    assert_eq!(first["escalated"], false);

    let (_, second) = chat(&app, json!({"message": "João", "conversation_id": "c2"})).await;
    assert_eq!(second["ticket_id"], 1);

    let (_, listing) = get_tickets(&app, "").await;
    let ticket = &listing["tickets"][0];
    assert_eq!(ticket["name"], "João");
    assert!(ticket["phone"].is_null());
    assert_eq!(ticket["message"], "Vocês vendem ração para gatos?");
}

#[tokio::test]
async fn faq_question_is_answered_without_ticket() {
    let app = sqlite_app().await;

    let (_, body) = chat(&app, json!({"message": "Qual o HORARIO de funcionamento?"})).await;

    assert_eq!(body["reply"], "Funcionamos de segunda a sábado, das 8h às 22h.");
    assert!(body["ticket_id"].is_null());
    let (_, listing) = get_tickets(&app, "").await;
    assert_eq!(listing["tickets"], json!([]));
}

#[tokio::test]
async fn conversations_do_not_share_pending_state() {
    let app = sqlite_app().await;

    chat(&app, json!({"message": "tenho um problema", "conversation_id": "a"})).await;
    let (_, other) = chat(
        &app,
        json!({"message": "fazem entrega?", "conversation_id": "b"}),
    )
    .await;
    assert_eq!(other["reply"], "Fazemos entregas em toda a cidade.");

    let (_, filed) = chat(
        &app,
        json!({"message": "Ana 21988887777", "conversation_id": "a"}),
    )
    .await;
    assert_eq!(filed["ticket_id"], 1);
}

#[tokio::test]
async fn tickets_are_listed_newest_first() {
    let app = sqlite_app().await;
    for i in 0..5 {
        let conversation = format!("c{}", i);
        chat(&app, json!({"message": "preciso de suporte", "conversation_id": conversation})).await;
        chat(&app, json!({"message": "Cliente 11912345678", "conversation_id": conversation})).await;
    }

    let (status, listing) = get_tickets(&app, "?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = listing["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4]);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn blank_conversation_id_returns_400() {
    let app = sqlite_app().await;

    let (status, body) = chat(&app, json!({"message": "oi", "conversation_id": "  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn blank_message_prompts_again() {
    let app = sqlite_app().await;

    let (status, body) = chat(&app, json!({"message": "   "})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], replies::EMPTY_MESSAGE);
}

#[tokio::test]
async fn failed_ticket_write_returns_503_and_keeps_pending_request() {
    let app = build_app(Arc::new(FailingTicketRepository));

    chat(&app, json!({"message": "quero reclamar", "conversation_id": "c1"})).await;
    let (status, body) = chat(
        &app,
        json!({"message": "Maria 11999998888", "conversation_id": "c1"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "TICKET_PERSISTENCE_FAILED");
    assert_eq!(body["retryable"], true);

    // The retry is treated as a contact reply again, not as a new intent.
    let (status, _) = chat(
        &app,
        json!({"message": "Maria 11999998888", "conversation_id": "c1"}),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
