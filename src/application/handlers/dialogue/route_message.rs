//! RouteMessage command handler.
//!
//! Drives the two-state conversation machine for one inbound message:
//!
//! 1. Blank message: generic prompt, state unchanged.
//! 2. `AwaitingContact`: consume the pending state, extract contact from
//!    this reply, open a ticket with the *pending* message.
//! 3. `AwaitingIntent`: escalation keyword or no FAQ match opens contact
//!    collection; an FAQ match is answered directly.

use std::sync::Arc;

use thiserror::Error;
use tracing::Instrument;

use crate::domain::dialogue::{
    extract_contact, replies, ContactTrigger, DialogueState, IntentRoute, IntentRouter,
    PendingContact,
};
use crate::domain::foundation::{ConversationId, TicketId, ValidationError};
use crate::domain::ticket::NewTicket;
use crate::ports::{ConversationStateStore, PersistenceError, StateStoreError, TicketRepository};

/// Command to route one inbound message.
#[derive(Debug, Clone)]
pub struct RouteMessageCommand {
    /// Conversation the message belongs to.
    pub conversation_id: ConversationId,
    /// Raw message text as received.
    pub message: String,
}

impl RouteMessageCommand {
    pub fn new(conversation_id: ConversationId, message: impl Into<String>) -> Self {
        Self {
            conversation_id,
            message: message.into(),
        }
    }
}

/// Which transition a message took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Blank message; asked how to help.
    Prompted,
    /// Answered from the knowledge base.
    Answered,
    /// Contact collection opened.
    ContactRequested(ContactTrigger),
    /// Contact received and ticket opened.
    TicketCreated,
}

impl RouteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteOutcome::Prompted => "prompted",
            RouteOutcome::Answered => "answered",
            RouteOutcome::ContactRequested(ContactTrigger::Escalation) => "contact_requested_escalation",
            RouteOutcome::ContactRequested(ContactTrigger::NoMatch) => "contact_requested_no_match",
            RouteOutcome::TicketCreated => "ticket_created",
        }
    }
}

/// Result of routing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMessageResult {
    /// Text sent back to the user.
    pub reply: String,
    /// True only when this turn opened a ticket.
    pub escalated: bool,
    /// Ticket opened by this turn.
    pub ticket_id: Option<TicketId>,
    /// Conversation state after this turn.
    pub state: DialogueState,
    pub outcome: RouteOutcome,
}

impl RouteMessageResult {
    fn reply(reply: impl Into<String>, state: DialogueState, outcome: RouteOutcome) -> Self {
        Self {
            reply: reply.into(),
            escalated: false,
            ticket_id: None,
            state,
            outcome,
        }
    }
}

/// Errors that can occur when routing a message.
#[derive(Debug, Error)]
pub enum RouteMessageError {
    /// The conversation state could not be read or written.
    #[error("Conversation state error: {0}")]
    StateStore(#[from] StateStoreError),

    /// The ticket could not be saved. The pending message was handed back,
    /// so resending the contact reply retries the ticket.
    #[error("Ticket could not be saved: {0}")]
    TicketPersistence(#[source] PersistenceError),

    /// The pending message could not form a ticket.
    #[error("Invalid ticket: {0}")]
    InvalidTicket(#[from] ValidationError),

    /// The background ticket task panicked or was aborted.
    #[error("Ticket task failed: {0}")]
    TaskFailed(String),
}

impl RouteMessageError {
    /// Whether the client may resend the same message.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RouteMessageError::TicketPersistence(_) | RouteMessageError::StateStore(_)
        )
    }
}

/// Handler for inbound chat messages.
pub struct RouteMessageHandler {
    states: Arc<dyn ConversationStateStore>,
    tickets: Arc<dyn TicketRepository>,
    router: Arc<IntentRouter>,
}

impl RouteMessageHandler {
    pub fn new(
        states: Arc<dyn ConversationStateStore>,
        tickets: Arc<dyn TicketRepository>,
        router: Arc<IntentRouter>,
    ) -> Self {
        Self {
            states,
            tickets,
            router,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(conversation_id = %cmd.conversation_id))]
    pub async fn handle(
        &self,
        cmd: RouteMessageCommand,
    ) -> Result<RouteMessageResult, RouteMessageError> {
        let id = &cmd.conversation_id;
        let message = cmd.message.trim();

        let result = if message.is_empty() {
            let state = DialogueState::of(self.states.get(id).await?.as_ref());
            RouteMessageResult::reply(replies::EMPTY_MESSAGE, state, RouteOutcome::Prompted)
        } else if let Some(filed) = self.consume_pending(id, message).await? {
            filed
        } else {
            match self.router.route(message) {
                IntentRoute::Answer { response, score } => {
                    tracing::debug!(score, "FAQ match");
                    RouteMessageResult::reply(
                        response,
                        DialogueState::AwaitingIntent,
                        RouteOutcome::Answered,
                    )
                }
                IntentRoute::CollectContact(trigger) => {
                    self.open_contact_collection(id, message, trigger).await?
                }
            }
        };

        tracing::info!(
            outcome = result.outcome.as_str(),
            ticket_id = result.ticket_id.map(|t| t.value()),
            "Message routed"
        );
        Ok(result)
    }

    /// Shared transition for explicit escalation and the no-match fallback.
    async fn open_contact_collection(
        &self,
        id: &ConversationId,
        message: &str,
        trigger: ContactTrigger,
    ) -> Result<RouteMessageResult, RouteMessageError> {
        self.states.put(id, PendingContact::new(message)).await?;
        Ok(RouteMessageResult::reply(
            replies::contact_request(trigger),
            DialogueState::AwaitingContact,
            RouteOutcome::ContactRequested(trigger),
        ))
    }

    /// Consumes a pending contact, if any, and files its ticket.
    ///
    /// Runs on its own task: once the pending entry is taken, the ticket
    /// write (or the restore) completes even if this request is dropped.
    async fn consume_pending(
        &self,
        id: &ConversationId,
        reply: &str,
    ) -> Result<Option<RouteMessageResult>, RouteMessageError> {
        let task = tokio::spawn(
            take_and_file(
                Arc::clone(&self.states),
                Arc::clone(&self.tickets),
                id.clone(),
                reply.to_string(),
            )
            .in_current_span(),
        );

        task.await
            .map_err(|e| RouteMessageError::TaskFailed(e.to_string()))?
    }
}

async fn take_and_file(
    states: Arc<dyn ConversationStateStore>,
    tickets: Arc<dyn TicketRepository>,
    id: ConversationId,
    reply: String,
) -> Result<Option<RouteMessageResult>, RouteMessageError> {
    let Some(pending) = states.take_and_remove(&id).await? else {
        return Ok(None);
    };

    let contact = extract_contact(&reply);
    let ticket = NewTicket::new(contact.name, contact.phone, pending.message.clone())?;

    let ticket_id = match tickets.create(&ticket).await {
        Ok(ticket_id) => ticket_id,
        Err(err) => {
            match states.restore(&id, pending).await {
                Ok(true) => {
                    tracing::warn!(error = %err, "Ticket not saved; pending message restored")
                }
                Ok(false) => tracing::warn!(
                    error = %err,
                    "Ticket not saved; newer pending message kept"
                ),
                Err(restore_err) => tracing::error!(
                    error = %err,
                    restore_error = %restore_err,
                    "Ticket not saved and pending message lost"
                ),
            }
            return Err(RouteMessageError::TicketPersistence(err));
        }
    };

    Ok(Some(RouteMessageResult {
        reply: replies::ticket_confirmation(ticket_id),
        escalated: true,
        ticket_id: Some(ticket_id),
        state: DialogueState::AwaitingIntent,
        outcome: RouteOutcome::TicketCreated,
    }))
}
