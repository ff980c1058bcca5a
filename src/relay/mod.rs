mod fallback;
mod sanitize;
mod template;

pub use fallback::FallbackPolicy;
pub use sanitize::{Sanitizer, strip_quotes};
pub use template::{PROMPT_PLACEHOLDER, PromptTemplate};

use crate::{
    Error, Result,
    config::{Config, RelayConfig, ResponseMode, UpstreamConfig},
    inference::{
        GenerationParameters, HuggingFaceClient, TextGenerationRequest, TextGenerationResponse,
        TextGenerator,
    },
};
use std::sync::Arc;
use tracing::{debug, info};

const LOG_PREVIEW_CHARS: usize = 50;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("prompt is missing")]
    Missing,

    #[error("prompt is blank")]
    Blank,

    #[error("prompt exceeds {max} characters")]
    TooLong { max: usize },
}

/// What the relay hands back to the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutput {
    Text(String),
    Raw(serde_json::Value),
}

/// Validate -> call -> parse -> sanitize, for one prompt at a time.
pub struct PromptRelay {
    generator: Arc<dyn TextGenerator>,
    sanitizer: Sanitizer,
    fallback: FallbackPolicy,
    parameters: GenerationParameters,
    max_prompt_chars: usize,
    mode: ResponseMode,
}

impl PromptRelay {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        upstream: &UpstreamConfig,
        relay: &RelayConfig,
    ) -> Result<Self> {
        let template = PromptTemplate::new(&upstream.prompt_template)?;

        Ok(Self {
            generator,
            sanitizer: Sanitizer::new(template),
            fallback: FallbackPolicy::new(relay.min_response_chars, &relay.fallback_responses)?,
            parameters: GenerationParameters::from(&upstream.parameters),
            max_prompt_chars: relay.max_prompt_chars,
            mode: relay.response_mode,
        })
    }

    /// Wires the relay to the hosted inference API described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HuggingFaceClient::new(&config.upstream);
        Self::new(Arc::new(client), &config.upstream, &config.relay)
    }

    pub fn validate<'a>(
        &self,
        prompt: Option<&'a str>,
    ) -> std::result::Result<&'a str, PromptError> {
        validate_prompt(prompt, self.max_prompt_chars)
    }

    pub async fn relay(&self, prompt: &str) -> Result<RelayOutput> {
        let request = TextGenerationRequest {
            inputs: self.sanitizer.template().render(prompt),
            parameters: self.parameters.clone(),
        };

        let body = self.generator.generate(request).await?;

        if self.mode == ResponseMode::Raw {
            debug!("Passing upstream body through untouched");
            return Ok(RelayOutput::Raw(body));
        }

        let generation = TextGenerationResponse::decode(&body)?;
        let raw_text = generation
            .first_text()
            .ok_or_else(|| Error::decode("response contained no generations"))?;

        let cleaned = self.sanitizer.clean(prompt, raw_text);
        if cleaned.chars().count() < self.fallback.min_chars() {
            debug!("Generated text too short after cleanup, using fallback");
        }
        let text = self.fallback.apply(prompt, cleaned);

        info!("Whisperer responded: {}...", preview(&text));

        Ok(RelayOutput::Text(text))
    }
}

pub fn validate_prompt(
    prompt: Option<&str>,
    max_chars: usize,
) -> std::result::Result<&str, PromptError> {
    let prompt = prompt.ok_or(PromptError::Missing)?;
    if prompt.trim().is_empty() {
        return Err(PromptError::Blank);
    }
    if prompt.chars().count() > max_chars {
        return Err(PromptError::TooLong { max: max_chars });
    }
    Ok(prompt)
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
