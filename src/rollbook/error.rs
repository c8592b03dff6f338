use crate::store::StoreState;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Store is not initialized (state: {0})")]
    NotInitialized(StoreState),

    #[error("Data file {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid import input: {0}")]
    InvalidImportInput(String),

    #[error("Failed to {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RollbookError {
    pub(crate) fn persistence(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Persistence {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RollbookError>;
