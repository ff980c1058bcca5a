use super::types::*;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, error};

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the upstream JSON body as received.
    async fn generate(&self, request: TextGenerationRequest) -> Result<serde_json::Value>;
}

/// Client for the Hugging Face hosted inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: model_endpoint(&config.base_url, &config.model),
            api_token: config.api_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn model_endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}",
        base_url.trim_end_matches('/'),
        model.trim_start_matches('/')
    )
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, request: TextGenerationRequest) -> Result<serde_json::Value> {
        debug!(
            "Sending text generation request to {} ({} input chars)",
            self.endpoint,
            request.inputs.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Inference API error: {} {}", status.as_u16(), body);
            return Err(Error::from_upstream_status(status.as_u16()));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::decode(format!("response body is not JSON: {}", e)))?;

        debug!("Received text generation response");

        Ok(raw)
    }
}
