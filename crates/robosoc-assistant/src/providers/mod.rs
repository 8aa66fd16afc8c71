//! Provider abstraction for the chat completion service
//!
//! Request handlers only see [`LlmProvider`], so the completion backend can be
//! swapped (or mocked in tests) without touching the HTTP layer.

pub mod llm;
pub mod together;

pub use llm::LlmProvider;
pub use together::TogetherClient;

#[cfg(test)]
pub(crate) mod mock;
