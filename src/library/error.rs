//! Errors reported by the screenshot library

use thiserror::Error;

use crate::storage::StorageError;

/// Failures of library operations. None of them are fatal.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("'{0}' was not found")]
    NotFound(String),

    #[error("A file named '{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' is not a valid file name")]
    InvalidName(String),

    #[error("Failed to load preview of '{name}': {source}")]
    LoadError {
        name: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to capture screenshot: {0}")]
    Capture(String),

    #[error("Failed to list files: {0}")]
    DirectoryAccess(#[source] StorageError),

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for LibraryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(name) => LibraryError::NotFound(name),
            StorageError::AlreadyExists(name) => LibraryError::AlreadyExists(name),
            StorageError::InvalidName(name) => LibraryError::InvalidName(name),
            StorageError::Decode { name, source } => LibraryError::LoadError {
                name: name.clone(),
                source: StorageError::Decode { name, source },
            },
            StorageError::ReadDir { .. } => LibraryError::DirectoryAccess(err),
            other => LibraryError::Storage(other),
        }
    }
}
