//! Error types for the LeFrecce client
//!
//! Every operation returns a typed error so callers can branch on the
//! failure kind: transport fault, non-2xx response, or a body that did
//! not decode as JSON. Failures are terminal per call; nothing retries.

use thiserror::Error;

/// Error type for LeFrecce API operations
#[derive(Error, Debug)]
pub enum LefrecceError {
    /// Transport-level failure (DNS, TLS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body, as far as it could be read
        body: String,
    },

    /// The response body was not valid JSON
    #[error("failed to decode JSON response: {message}")]
    Json {
        /// Decoder error message
        message: String,
        /// Truncated response body, when available
        body: Option<String>,
    },

    /// Writing a downloaded ticket to disk failed
    #[error("failed to write ticket file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for LeFrecce API operations
pub type Result<T> = std::result::Result<T, LefrecceError>;
