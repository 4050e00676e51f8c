//! Registry error types

use thiserror::Error;

use super::stage::ModelStage;
use crate::storage::StorageError;

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Version not found: {0}")]
    VersionNotFound(i64),

    #[error("Model '{model}' has no version in stage {stage}")]
    NoVersionInStage { model: String, stage: ModelStage },

    #[error("Model '{0}' already exists")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Registry storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    /// True for every absence outcome (model, version, or stage match)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ModelNotFound(_)
                | RegistryError::VersionNotFound(_)
                | RegistryError::NoVersionInStage { .. }
        )
    }
}

impl From<StorageError> for RegistryError {
    fn from(e: StorageError) -> Self {
        RegistryError::Storage(e.to_string())
    }
}

impl From<rusqlite::Error> for RegistryError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::from(e).into()
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
