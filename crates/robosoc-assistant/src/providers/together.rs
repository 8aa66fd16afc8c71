//! Together AI chat completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};

use super::llm::LlmProvider;

/// Client for the OpenAI-compatible `/chat/completions` endpoint
pub struct TogetherClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl TogetherClient {
    /// Create a new client
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, system_prompt: &'a str, user_message: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Take the first choice's content
    fn parse_reply(response: ChatCompletionResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("No choices in completion response"))?
            .message
            .content
            .ok_or_else(|| Error::llm("Completion response has no content"))
    }
}

#[async_trait]
impl LlmProvider for TogetherClient {
    async fn chat(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let request = self.build_request(system_prompt, user_message);

        tracing::debug!("Requesting completion from {} with model {}", self.endpoint(), self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Completion failed: HTTP {} - {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse completion response: {}", e)))?;

        Self::parse_reply(completion)
    }

    fn name(&self) -> &str {
        "together"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
