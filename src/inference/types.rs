use crate::{Error, Result, config::GenerationDefaults};
use serde::{Deserialize, Serialize};

/// Body of a text-generation call: `{inputs, parameters}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// The two payload shapes the inference API answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl From<&GenerationDefaults> for GenerationParameters {
    fn from(defaults: &GenerationDefaults) -> Self {
        Self {
            max_new_tokens: defaults.max_new_tokens,
            temperature: defaults.temperature,
            top_p: defaults.top_p,
            repetition_penalty: defaults.repetition_penalty,
            return_full_text: defaults.return_full_text,
        }
    }
}

impl TextGenerationResponse {
    pub fn decode(raw: &serde_json::Value) -> Result<Self> {
        Self::deserialize(raw)
            .map_err(|_| Error::decode(format!("unrecognized response shape: {}", raw)))
    }

    /// Text of the first generation, if the payload carries one.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::Batch(items) => items.first().map(|item| item.generated_text.as_str()),
            Self::Single(item) => Some(item.generated_text.as_str()),
        }
    }
}
