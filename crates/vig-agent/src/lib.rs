//! # vig-agent
//!
//! Text-generation agent interface for Vigia.
//!
//! The agent turns a listing-page location plus a required output shape into
//! free-form text that should contain a JSON array. The return value is
//! always untrusted text — parsing and validation live in `vig-core`.
//!
//! [`ChatClient`] talks to any OpenAI-compatible chat-completions endpoint;
//! [`MockAgent`] replays canned responses for tests.

mod chat;
mod error;
mod http;
mod mock;
mod prompt;

pub use chat::ChatClient;
pub use error::AgentError;
pub use mock::MockAgent;
pub use prompt::listing_prompt;

/// A text-generation agent.
///
/// One call per source per run; the request timeout is the only bound, there
/// is no retry. Implementations must be safe to share behind `Arc`.
#[async_trait::async_trait]
pub trait Agent: Send + Sync {
    /// Generate free-form text for the given instruction prompt.
    async fn generate(&self, prompt: &str) -> Result<String, AgentError>;
}
