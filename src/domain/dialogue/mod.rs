//! Dialogue module - message routing vocabulary.
//!
//! - `normalize` - text canonicalization
//! - `EscalationDetector` - explicit requests for a human
//! - `FaqMatcher` - keyword scoring over the knowledge base
//! - `extract_contact` - name/phone parsing of a contact reply
//! - `IntentRouter` - escalation / FAQ / fallback decision
//! - `DialogueState`, `PendingContact` - the two-state conversation model

mod contact;
mod escalation;
mod faq;
mod intent;
mod normalizer;
pub mod replies;
mod state;

pub use contact::{extract_contact, ContactDetails};
pub use escalation::{EscalationDetector, DEFAULT_ESCALATION_KEYWORDS};
pub use faq::{FaqEntry, FaqMatch, FaqMatcher};
pub use intent::{ContactTrigger, IntentRoute, IntentRouter};
pub use normalizer::normalize;
pub use state::{DialogueState, PendingContact};
