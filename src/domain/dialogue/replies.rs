//! Outward reply texts.

use crate::domain::foundation::TicketId;

use super::ContactTrigger;

pub const EMPTY_MESSAGE: &str = "Pode me dizer como posso ajudar? 😊";

pub const ESCALATION_CONTACT_REQUEST: &str =
    "Certo! Para te encaminhar, pode me informar seu *nome* e *telefone*? 😊";

pub const FALLBACK_CONTACT_REQUEST: &str = "Não consegui te ajudar com isso agora. Pode me informar seu *nome* e *telefone* para eu encaminhar a um atendente? 😊";

/// Reply asking for contact details, worded by what opened the collection.
pub fn contact_request(trigger: ContactTrigger) -> &'static str {
    match trigger {
        ContactTrigger::Escalation => ESCALATION_CONTACT_REQUEST,
        ContactTrigger::NoMatch => FALLBACK_CONTACT_REQUEST,
    }
}

/// Confirmation sent once the ticket is stored.
pub fn ticket_confirmation(id: TicketId) -> String {
    format!(
        "Obrigado! Encaminhei seu atendimento para um atendente humano 😊 (Ticket #{})",
        id
    )
}
