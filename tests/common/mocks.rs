use async_trait::async_trait;
use whisperer::{
    Error, Result,
    inference::{TextGenerationRequest, TextGenerator},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Mock text generator for testing
#[derive(Debug)]
pub struct MockTextGenerator {
    pub body: Value,
    pub requests: Arc<Mutex<Vec<TextGenerationRequest>>>,
    pub error: Option<fn() -> Error>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            body: json!([{"generated_text": "Penguins are great swimmers."}]),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_body(json!([{ "generated_text": text }]))
    }

    pub fn with_error(mut self, error: fn() -> Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<TextGenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: TextGenerationRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);

        if let Some(error) = self.error {
            return Err(error());
        }

        Ok(self.body.clone())
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
