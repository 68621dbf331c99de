//! Ticket records.

use serde::Serialize;

use crate::domain::foundation::{TicketId, Timestamp, ValidationError};

use super::TicketStatus;

/// A validated request to open a ticket.
///
/// The repository assigns the id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    name: Option<String>,
    phone: Option<String>,
    message: String,
}

impl NewTicket {
    /// Builds a ticket request.
    ///
    /// Blank `name`/`phone` collapse to `None`.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyField` if `message` is blank.
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        Ok(Self {
            name: non_blank(name),
            phone: non_blank(phone),
            message,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status every new ticket starts in.
    pub fn initial_status(&self) -> TicketStatus {
        TicketStatus::Open
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A persisted support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: TicketId,
    pub created_at: Timestamp,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub status: TicketStatus,
}

impl Ticket {
    /// Materializes a stored ticket from its request and assigned fields.
    pub fn from_new(id: TicketId, created_at: Timestamp, new: &NewTicket) -> Self {
        Self {
            id,
            created_at,
            name: new.name.clone(),
            phone: new.phone.clone(),
            message: new.message.clone(),
            status: new.initial_status(),
        }
    }
}
