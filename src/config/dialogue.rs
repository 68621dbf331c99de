//! Dialogue configuration: knowledge base location and escalation keywords

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::dialogue::EscalationDetector;

/// Dialogue routing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Path of the FAQ file (`.json`, `.yaml` or `.yml`)
    #[serde(default = "default_faq_path")]
    pub faq_path: PathBuf,

    /// Escalation keyword override (comma-separated). Built-in set when unset.
    pub escalation_keywords: Option<String>,
}

impl DialogueConfig {
    /// Keyword override as a list, blank items skipped
    pub fn escalation_keywords_list(&self) -> Option<Vec<String>> {
        self.escalation_keywords.as_ref().map(|s| {
            s.split(',')
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Detector for the configured keywords
    pub fn escalation_detector(&self) -> EscalationDetector {
        match self.escalation_keywords_list() {
            Some(keywords) => EscalationDetector::new(keywords),
            None => EscalationDetector::default(),
        }
    }

    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.faq_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DIALOGUE__FAQ_PATH"));
        }
        if matches!(self.escalation_keywords_list(), Some(ref k) if k.is_empty()) {
            return Err(ValidationError::EmptyEscalationKeywords);
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            faq_path: default_faq_path(),
            escalation_keywords: None,
        }
    }
}

fn default_faq_path() -> PathBuf {
    PathBuf::from("faq.json")
}
