use thiserror::Error;

use crate::http_status::HttpStatus;

/// A failure that already knows which status it maps to. Route
/// handlers bubble these up through `anyhow`; the dispatch loop
/// downcasts and turns them into the public error response. Anything
/// that is not an `HttpError` becomes a 500.
#[derive(Debug, Error)]
#[error("{status:?}: {message}")]
pub struct HttpError {
    pub status: HttpStatus,
    /// Internal detail; goes to the log, never into the response body.
    pub message: String,
}

impl HttpError {
    pub fn new(status: HttpStatus, message: impl Into<String>) -> Self {
        HttpError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(HttpStatus::NotFound404, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(HttpStatus::MethodNotAllowed405, message)
    }
}
