//! System prompt generation

pub mod prompt;

pub use prompt::{PromptBuilder, SystemPrompt};
