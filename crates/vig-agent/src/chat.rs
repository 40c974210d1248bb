//! OpenAI-compatible chat-completions client.

use serde::Serialize;

use crate::Agent;
use crate::error::AgentError;
use crate::http::check_response;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Create a client for the given endpoint.
    ///
    /// `base_url` and `model` fall back to the OpenAI defaults when empty.
    /// The timeout bounds the whole request; there are no retries.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(api_key: &str, base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        let model = if model.is_empty() { DEFAULT_MODEL } else { model };
        Self {
            http: reqwest::Client::builder()
                .user_agent("vigia/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Agent for ChatClient {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let resp = check_response(
            self.http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await?,
        )
        .await?;

        let data: ChatResponse = resp.json().await?;
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AgentError::EmptyCompletion("response carried no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "[{\"title\": \"Edital 01/2025\", \"deadline\": \"15/12/2025\"}]"
                },
                "finish_reason": "stop"
            }
        ]
    }"#;

    #[test]
    fn parse_chat_response() {
        let data: ChatResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.choices.len(), 1);
        let content = data.choices[0].message.content.as_deref().unwrap();
        assert!(content.contains("Edital 01/2025"));
    }

    #[test]
    fn parse_response_with_null_content() {
        let data: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(data.choices[0].message.content.is_none());
    }

    #[test]
    fn client_defaults_apply_when_config_empty() {
        let client = ChatClient::new("key", "", "", 30);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = ChatClient::new("key", "https://llm.internal/v1/", "custom", 30);
        assert_eq!(client.base_url, "https://llm.internal/v1");
        assert_eq!(client.model, "custom");
    }
}
