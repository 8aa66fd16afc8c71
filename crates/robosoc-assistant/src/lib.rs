//! robosoc-assistant: chat backend for Robotics Society NITH
//!
//! At startup the configured PDF documents are extracted into a labeled
//! knowledge base, which is rendered once into a fixed system prompt. Every
//! chat request pairs that prompt with the user's message and forwards both to
//! an OpenAI-compatible completion API.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod server;
pub mod types;

pub use config::AssistantConfig;
pub use error::{Error, Result};
pub use generation::{PromptBuilder, SystemPrompt};
pub use ingestion::{Extraction, KnowledgeBase, PdfExtractor};
pub use providers::LlmProvider;
pub use types::{ChatRequest, ChatResponse};
