//! Routing decision for a conversation that is not collecting contact.

use super::{EscalationDetector, FaqMatcher};

/// Why a contact-collection turn was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactTrigger {
    /// The user asked for a human.
    Escalation,
    /// Nothing in the knowledge base matched.
    NoMatch,
}

impl ContactTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactTrigger::Escalation => "escalation",
            ContactTrigger::NoMatch => "no_match",
        }
    }
}

/// Outcome of routing a message in the `AwaitingIntent` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentRoute {
    /// Answer from the knowledge base; state stays `AwaitingIntent`.
    Answer { response: String, score: u32 },
    /// Ask for contact details; state becomes `AwaitingContact`.
    CollectContact(ContactTrigger),
}

/// Pure decision logic: escalation keywords first, then FAQ, then fallback.
#[derive(Debug, Clone, Default)]
pub struct IntentRouter {
    escalation: EscalationDetector,
    faq: FaqMatcher,
}

impl IntentRouter {
    pub fn new(escalation: EscalationDetector, faq: FaqMatcher) -> Self {
        Self { escalation, faq }
    }

    /// Routes a non-blank message.
    pub fn route(&self, message: &str) -> IntentRoute {
        if self.escalation.should_escalate(message) {
            return IntentRoute::CollectContact(ContactTrigger::Escalation);
        }

        match self.faq.best_answer(message) {
            Some(found) => IntentRoute::Answer {
                response: found.response,
                score: found.score,
            },
            None => IntentRoute::CollectContact(ContactTrigger::NoMatch),
        }
    }

    pub fn faq(&self) -> &FaqMatcher {
        &self.faq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::FaqEntry;

    fn router() -> IntentRouter {
        IntentRouter::new(
            EscalationDetector::default(),
            FaqMatcher::new(vec![
                FaqEntry::new(["horário", "abre"], Some("Abrimos das 8h às 22h".into())),
                FaqEntry::new(["problema"], Some("never reached".into())),
            ]),
        )
    }

    #[test]
    fn escalation_wins_over_faq() {
        assert_eq!(
            router().route("tive um problema com o horário"),
            IntentRoute::CollectContact(ContactTrigger::Escalation)
        );
    }

    #[test]
    fn faq_answer_when_no_escalation() {
        assert_eq!(
            router().route("Que horas abre?"),
            IntentRoute::Answer {
                response: "Abrimos das 8h às 22h".into(),
                score: 1
            }
        );
    }

    #[test]
    fn falls_back_to_contact_collection() {
        assert_eq!(
            router().route("vocês vendem bicicleta?"),
            IntentRoute::CollectContact(ContactTrigger::NoMatch)
        );
    }
}
