//! Farmabot HTTP server.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use farmabot::adapters::http::{app_router, ChatAppState, TicketsAppState};
use farmabot::adapters::sqlite::{self, SqliteTicketRepository};
use farmabot::adapters::storage::{FileKnowledgeBase, InMemoryConversationStateStore};
use farmabot::application::{ListTicketsHandler, RouteMessageHandler};
use farmabot::config::AppConfig;
use farmabot::domain::dialogue::{FaqMatcher, IntentRouter};
use farmabot::ports::{ConversationStateStore, KnowledgeBaseSource, TicketRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting farmabot"
    );

    let entries = FileKnowledgeBase::new(&config.dialogue.faq_path).load()?;
    let router = IntentRouter::new(
        config.dialogue.escalation_detector(),
        FaqMatcher::new(entries),
    );
    info!(
        faq_entries = router.faq().len(),
        path = %config.dialogue.faq_path.display(),
        "Knowledge base loaded"
    );

    let pool = sqlite::connect(&config.database).await?;
    if config.database.run_migrations {
        sqlite::run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    let states: Arc<dyn ConversationStateStore> = Arc::new(InMemoryConversationStateStore::new());
    let tickets: Arc<dyn TicketRepository> = Arc::new(SqliteTicketRepository::new(pool));

    let route_message = RouteMessageHandler::new(states, tickets.clone(), Arc::new(router));
    let list_tickets = ListTicketsHandler::new(tickets);

    let app = app_router(
        ChatAppState::new(Arc::new(route_message)),
        TicketsAppState::new(Arc::new(list_tickets)),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// JSON output in production, human-readable otherwise. `RUST_LOG` wins
/// over the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
