//! Agent error types.

use thiserror::Error;

/// Errors from the text-generation agent call.
///
/// All of these are recoverable per source: the caller treats a failed call
/// as zero candidates and moves on.
#[derive(Debug, Error)]
pub enum AgentError {
    /// HTTP transport error (includes request timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The agent API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response carried no usable message content.
    #[error("empty completion: {0}")]
    EmptyCompletion(String),
}
