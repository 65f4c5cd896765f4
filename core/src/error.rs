//! Error types for the todo store and its HTTP client.
//!
//! # Design
//! `TodoError` is the store's own error: exactly two recoverable cases, each
//! carrying the number the caller passed in. It is serializable so transports
//! can relay it unchanged (`{"TodoNotFound":7}`).
//!
//! `ApiError` is what `TodoClient` parse methods return. A relayed store error
//! comes back as `ApiError::Todo`; every other non-success response lands in
//! `HttpError` with the raw status code and body for debugging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TodoError {
    /// No todo with this id exists.
    #[error("todo {0} not found")]
    TodoNotFound(u64),

    /// The requested page has no todos on it.
    #[error("no todos found on page {0}")]
    TodoNotFoundOnPage(u64),
}

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server relayed a store error.
    #[error(transparent)]
    Todo(#[from] TodoError),

    /// The server returned an unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
