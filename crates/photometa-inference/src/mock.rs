//! Mock vision backend for deterministic testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use photometa_core::{Error, Result};

use crate::vision::VisionBackend;

/// Failure modes the mock can simulate.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Timeout,
    Upstream(String),
}

/// Mock vision backend returning a fixed reply (or a fixed failure) and
/// recording every dispatched image for assertions.
#[derive(Clone)]
pub struct MockVisionBackend {
    reply: String,
    failure: Option<MockFailure>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockVisionBackend {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            reply: String::new(),
            failure: Some(failure),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Images dispatched so far.
    pub fn dispatched(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl VisionBackend for MockVisionBackend {
    async fn analyze_image(&self, image: &str, _prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(image.to_string());

        match &self.failure {
            Some(MockFailure::Timeout) => Err(Error::Timeout("Request timed out.".to_string())),
            Some(MockFailure::Upstream(msg)) => Err(Error::Inference(msg.clone())),
            None => Ok(self.reply.clone()),
        }
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.failure.is_none())
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}
