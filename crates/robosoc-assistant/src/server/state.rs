//! Application state for the assistant server

use std::sync::Arc;

use crate::config::AssistantConfig;
use crate::error::{Error, Result};
use crate::generation::{PromptBuilder, SystemPrompt};
use crate::ingestion::{KnowledgeBase, PdfExtractor};
use crate::providers::{LlmProvider, TogetherClient};

/// Shared application state
///
/// Built once before the listener is bound; every field is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AssistantConfig,
    /// System prompt rendered at startup
    system_prompt: SystemPrompt,
    /// Completion provider
    llm_provider: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Create new application state: extract documents, build the prompt,
    /// and connect the completion client.
    pub async fn new(config: AssistantConfig) -> Result<Self> {
        tracing::info!("Initializing assistant state...");

        let system_prompt = Self::build_system_prompt(&config).await?;
        tracing::info!("System prompt ready ({} chars)", system_prompt.as_str().len());

        let llm_provider: Arc<dyn LlmProvider> = Arc::new(TogetherClient::new(&config.llm)?);
        tracing::info!(
            "LLM provider initialized ({} / {})",
            llm_provider.name(),
            llm_provider.model()
        );

        Ok(Self::from_parts(config, system_prompt, llm_provider))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        config: AssistantConfig,
        system_prompt: SystemPrompt,
        llm_provider: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                system_prompt,
                llm_provider,
            }),
        }
    }

    /// Extract the configured documents and render the system prompt.
    ///
    /// Fails with [`Error::EmptyKnowledgeBase`] when no document yields text.
    pub async fn build_system_prompt(config: &AssistantConfig) -> Result<SystemPrompt> {
        let sources = config.documents.resolved_sources();
        tracing::info!(
            "Loading {} knowledge base document(s) from {}",
            sources.len(),
            config.documents.static_root().display()
        );

        let extractor = PdfExtractor::new().with_timeout(config.documents.extract_timeout());
        let knowledge_base =
            tokio::task::spawn_blocking(move || KnowledgeBase::load_with(&extractor, &sources))
                .await
                .map_err(|e| Error::internal(format!("Document extraction task failed: {}", e)))??;

        Ok(PromptBuilder::build(&knowledge_base, &config.institute))
    }

    /// Get configuration
    pub fn config(&self) -> &AssistantConfig {
        &self.inner.config
    }

    /// Get the system prompt
    pub fn system_prompt(&self) -> &SystemPrompt {
        &self.inner.system_prompt
    }

    /// Get the completion provider
    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm_provider
    }
}
