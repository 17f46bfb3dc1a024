#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use pharmqa_core::{LLMError, LLMProvider, LLMResponse};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider double that replays canned replies in order and records prompts.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, LLMError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Result<S, LLMError>>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok::<_, LLMError>(*r)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, prompt: &str) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(LLMError::Provider("script exhausted".into())));
        reply.map(|text| LLMResponse::new(text, "scripted-model"))
    }
}
