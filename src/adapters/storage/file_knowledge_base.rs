//! File-based Knowledge Base Adapter
//!
//! Loads the ordered FAQ list from a JSON or YAML file:
//!
//! ```json
//! [
//!   { "keywords": ["horário", "abre"], "resposta": "Abrimos das 8h às 22h." }
//! ]
//! ```
//!
//! Records missing `keywords` or `resposta` are kept in place but can
//! never be selected.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::dialogue::FaqEntry;
use crate::ports::{KnowledgeBaseError, KnowledgeBaseSource};

/// On-disk shape of one FAQ record.
#[derive(Debug, Deserialize)]
struct FaqRecord {
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    resposta: Option<String>,
}

impl From<FaqRecord> for FaqEntry {
    fn from(record: FaqRecord) -> Self {
        FaqEntry::new(record.keywords.unwrap_or_default(), record.resposta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

/// Knowledge base read from a file on disk
#[derive(Debug, Clone)]
pub struct FileKnowledgeBase {
    path: PathBuf,
}

impl FileKnowledgeBase {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<Format, KnowledgeBaseError> {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(KnowledgeBaseError::UnsupportedFormat(self.path.clone())),
        }
    }

    fn parse_error(&self, reason: impl ToString) -> KnowledgeBaseError {
        KnowledgeBaseError::Parse {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl KnowledgeBaseSource for FileKnowledgeBase {
    fn load(&self) -> Result<Vec<FaqEntry>, KnowledgeBaseError> {
        let format = self.format()?;

        let raw = std::fs::read_to_string(&self.path).map_err(|source| KnowledgeBaseError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<FaqRecord> = match format {
            Format::Json => serde_json::from_str(&raw).map_err(|e| self.parse_error(e))?,
            Format::Yaml => serde_yaml::from_str(&raw).map_err(|e| self.parse_error(e))?,
        };

        Ok(records.into_iter().map(FaqEntry::from).collect())
    }
}
