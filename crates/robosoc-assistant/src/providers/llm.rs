//! LLM provider trait for chat replies

use async_trait::async_trait;

use crate::error::Result;

/// Trait for single-turn chat completion
///
/// Implementations:
/// - `TogetherClient`: Together AI OpenAI-compatible API
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a system prompt and one user message, return the assistant reply
    async fn chat(&self, system_prompt: &str, user_message: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
