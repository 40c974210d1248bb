//! Outbound mail delivery.

use serde::Serialize;

use crate::digest::Digest;
use crate::error::NotifyError;

/// An outbound notification channel.
///
/// One send per run at most; a failed send never rolls back seen-set
/// insertions.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a digest to the given recipient address.
    async fn send(&self, to: &str, digest: &Digest) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Mailer backed by a Resend-style HTTP mail API.
pub struct ResendMailer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl ResendMailer {
    const DEFAULT_BASE_URL: &'static str = "https://api.resend.com";

    /// Create a mailer for the given API credentials and sender address.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(api_key: &str, from: &str) -> Self {
        Self::with_base_url(api_key, from, Self::DEFAULT_BASE_URL)
    }

    /// Create a mailer against a non-default endpoint (used by tests).
    #[must_use]
    pub fn with_base_url(api_key: &str, from: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("vigia/0.1")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            from: from.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, digest: &Digest) -> Result<(), NotifyError> {
        let request = SendRequest {
            from: &self.from,
            to: [to],
            subject: &digest.subject,
            html: &digest.html,
            text: &digest.text,
        };

        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(NotifyError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        tracing::debug!(to, subject = %digest.subject, "digest delivered");
        Ok(())
    }
}
