//! Shared HTTP response helpers.

use crate::error::AgentError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise maps to
/// [`AgentError::Api`] with the status code and response body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, AgentError> {
    if !resp.status().is_success() {
        return Err(AgentError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
