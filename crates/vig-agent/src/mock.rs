//! In-memory agent for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::Agent;
use crate::error::AgentError;

/// Agent that replays canned responses.
///
/// Responses can be keyed by exact prompt or registered as a default. An
/// entire call can be made to fail to exercise per-source degradation.
#[derive(Default)]
pub struct MockAgent {
    responses: Mutex<HashMap<String, String>>,
    fail_with: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for an exact prompt.
    pub fn add_response(&self, prompt: &str, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.to_string(), response.to_string());
    }

    /// Register the fallback response for unmatched prompts.
    pub fn set_default_response(&self, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert("DEFAULT".to_string(), response.to_string());
    }

    /// Make every subsequent call fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Agent for MockAgent {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = self.fail_with.lock().unwrap().as_ref() {
            return Err(AgentError::EmptyCompletion(message.clone()));
        }

        let responses = self.responses.lock().unwrap();
        responses
            .get(prompt)
            .or_else(|| responses.get("DEFAULT"))
            .cloned()
            .ok_or_else(|| AgentError::EmptyCompletion("no canned response".to_string()))
    }
}
