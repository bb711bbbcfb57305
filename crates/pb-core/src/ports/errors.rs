use thiserror::Error;

/// Failures reported by a document store. Callers propagate them unchanged.
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("invalid document path: {0}")]
    InvalidPath(String),

    #[error("failed to decode document {path}: {message}")]
    Decode { path: String, message: String },

    #[error("failed to encode document: {0}")]
    Encode(String),

    #[error("storage error: {0}")]
    Storage(String),
}
