mod client;
mod types;

pub use client::{HuggingFaceClient, TextGenerator};
pub use types::{
    GeneratedText, GenerationParameters, TextGenerationRequest,
    TextGenerationResponse,
};
