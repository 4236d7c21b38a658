use super::{GatewayError, TextGenerator};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted generator for tests. Returns a fixed reply and records each call.
pub struct MockGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, Option<String>)>>,
}

impl MockGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    /// Every call fails with a backend error carrying `details`.
    pub fn failing(details: impl Into<String>) -> Self {
        Self::with_reply(Err(details.into()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last.lock().ok()?.as_ref().map(|(prompt, _)| prompt.clone())
    }

    pub fn last_model(&self) -> Option<String> {
        self.last.lock().ok()?.as_ref().and_then(|(_, model)| model.clone())
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some((prompt.to_string(), model.map(str::to_string)));
        }
        self.reply.clone().map_err(|details| GatewayError::Backend {
            backend: "Mock",
            details,
        })
    }
}
