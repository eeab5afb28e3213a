//! Error types for the API client
//!
//! The taxonomy is deliberately flat: every failure is consumable as a
//! single message string via `Display`. No structured error codes survive
//! past this layer.

use thiserror::Error;

/// Errors that can occur when talking to the posts API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request with a structured error body
    ///
    /// `Display` is the bare message from the `{ "message": ... }` body,
    /// with nothing prepended.
    #[error("{0}")]
    Api(String),

    /// The server responded non-2xx without a structured error body
    #[error("API error (status {status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body (may be empty)
        body: String,
    },

    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("{0}")]
    Transport(String),

    /// A successful response body failed to parse
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// The failure reduced to its message string
    ///
    /// Equivalent to `to_string()`; exists to make the single-message
    /// contract explicit at call sites.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
