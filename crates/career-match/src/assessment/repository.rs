use std::path::{Path, PathBuf};

use crate::psychometrics::QuestionItem;

/// Source of the active question bank so the service can be exercised in isolation.
pub trait QuestionBank: Send + Sync {
    fn active_items(&self) -> Result<Vec<QuestionItem>, QuestionBankError>;
}

/// Error enumeration for question bank failures.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("unable to read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed question bank {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("question bank unavailable: {0}")]
    Unavailable(String),
}

/// Question bank held in memory, typically loaded once from a JSON array of items.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionBank {
    items: Vec<QuestionItem>,
}

impl StaticQuestionBank {
    pub fn new(items: Vec<QuestionItem>) -> Self {
        Self { items }
    }

    pub fn from_path(path: &Path) -> Result<Self, QuestionBankError> {
        let raw = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items = serde_json::from_str(&raw).map_err(|source| QuestionBankError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl QuestionBank for StaticQuestionBank {
    fn active_items(&self) -> Result<Vec<QuestionItem>, QuestionBankError> {
        Ok(self.items.clone())
    }
}
