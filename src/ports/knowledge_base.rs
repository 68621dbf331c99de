//! Knowledge base port - source of the ordered FAQ entries.

use std::path::PathBuf;

use crate::domain::dialogue::FaqEntry;

/// Errors raised while loading the knowledge base. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse knowledge base {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported knowledge base format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Port for loading FAQ entries, in their significant order.
pub trait KnowledgeBaseSource: Send + Sync {
    fn load(&self) -> Result<Vec<FaqEntry>, KnowledgeBaseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_base_source_is_object_safe() {
        fn _accepts_dyn(_source: &dyn KnowledgeBaseSource) {}
    }

    #[test]
    fn unsupported_format_names_the_file() {
        let err = KnowledgeBaseError::UnsupportedFormat(PathBuf::from("faq.csv"));
        assert!(err.to_string().contains("faq.csv"));
    }
}
