//! Notification error types.

use thiserror::Error;

/// Errors from digest delivery.
///
/// Delivery failures are recoverable for the run as a whole: the seen-set
/// insertions stand, the failure is logged, and the process still exits
/// cleanly.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the mail API.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}
