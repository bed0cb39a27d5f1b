//! Error types for the todo API client.
//!
//! `NotFound` gets its own variant because callers distinguish "the todo does
//! not exist" from "the server answered with something unexpected". Every
//! other non-success status lands in `HttpError` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("todo not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was received at all.
    #[error("transport failed: {0}")]
    TransportError(String),
}
