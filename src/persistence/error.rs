//! Error types for annotation persistence.

use thiserror::Error;

use super::PhotoId;

/// Errors raised by a record store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error in a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored envelope could not be read back
    #[error("Corrupt record for photo {photo_id}: {message}")]
    Corrupt {
        /// Photo the record belongs to
        photo_id: PhotoId,
        /// What was wrong with it
        message: String,
    },

    /// The backend refused or could not serve the request
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while saving or loading annotations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The record store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but holds values the session cannot use
    #[error("Invalid annotation payload: {message}")]
    InvalidPayload {
        /// Description of the problem
        message: String,
    },

    /// The image has no persisted photo id to save under
    #[error("Image {index} has no photo id")]
    MissingPhotoId {
        /// Viewer index of the image
        index: usize,
    },
}

impl PersistenceError {
    /// Create an invalid payload error with a message.
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }
}
