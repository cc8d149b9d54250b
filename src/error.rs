//! Error types for the book store
//!
//! Provides a unified error type for all operations. The HTTP translation of
//! each variant lives in `api::response`.

use thiserror::Error;

/// Result type alias using BookError
pub type Result<T> = std::result::Result<T, BookError>;

/// Unified error type for book store operations
#[derive(Debug, Error)]
pub enum BookError {
    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Wrong format for id")]
    InvalidId(String),

    #[error("Malformed Request")]
    MalformedBody(String),

    #[error("ID in URL does not match ID in request body")]
    IdMismatch { path: i64, body: i64 },

    #[error("unexpected field")]
    UnexpectedField(String),

    #[error("{field} was of invalid type")]
    InvalidFieldValue { field: &'static str, value: String },

    #[error("Invalid Body Type")]
    UnsupportedMediaType,

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("ID not found")]
    NotFound(i64),

    #[error("ID already exists")]
    Conflict(i64),

    #[error("Search is not available")]
    SearchUnavailable,

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookError {
    /// True for errors caused by the client's request rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BookError::Io(_) | BookError::SearchUnavailable)
    }
}
