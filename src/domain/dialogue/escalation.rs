//! Detection of explicit requests for human help.

use super::normalize;

/// Keywords that route a conversation to a human (Portuguese, case-folded).
pub const DEFAULT_ESCALATION_KEYWORDS: &[&str] = &[
    "humano",
    "atendente",
    "pessoa",
    "urgente",
    "reclama",
    "reclamação",
    "problema",
    "não resolveu",
    "não entendi",
    "falar com atendente",
    "suporte",
];

/// Flags messages that ask for a human, by substring containment.
///
/// Matching is not word-aware: a keyword embedded inside a longer word
/// still matches ("reclamar" contains "reclama").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationDetector {
    keywords: Vec<String>,
}

impl EscalationDetector {
    /// Builds a detector from a custom keyword set.
    ///
    /// Keywords are normalized; blank ones are ignored since the empty
    /// string would match every message.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = normalize(keyword.as_ref());
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    /// True iff any keyword occurs in the normalized message.
    pub fn should_escalate(&self, message: &str) -> bool {
        let normalized = normalize(message);
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for EscalationDetector {
    fn default() -> Self {
        Self::new(DEFAULT_ESCALATION_KEYWORDS)
    }
}
