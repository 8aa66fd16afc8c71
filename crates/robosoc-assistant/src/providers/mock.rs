//! Test-only mock LLM provider.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};

use super::llm::LlmProvider;

/// Scripted provider that records every call
#[derive(Debug, Default)]
pub(crate) struct MockProvider {
    scripted: Mutex<VecDeque<Result<String>>>,
    default_reply: String,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl MockProvider {
    /// Always reply with `reply`
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            default_reply: reply.to_string(),
            ..Self::default()
        }
    }

    /// Fail the next call, then reply with `reply`
    pub(crate) fn failing_once_then(reply: &str) -> Self {
        let provider = Self::replying(reply);
        provider
            .scripted
            .lock()
            .unwrap()
            .push_back(Err(Error::llm("mock upstream unavailable")));
        provider
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system_prompt, user_message)` of the most recent call
    pub(crate) fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn chat(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() =
            Some((system_prompt.to_string(), user_message.to_string()));

        match self.scripted.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.default_reply.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
