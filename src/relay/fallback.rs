use crate::{Error, Result};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Replaces answers too short to be useful with a canned sentence.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    min_chars: usize,
    sentences: Vec<String>,
}

impl FallbackPolicy {
    pub fn new(min_chars: usize, sentences: &[String]) -> Result<Self> {
        let sentences: Vec<String> = sentences
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if sentences.is_empty() {
            return Err(Error::config("at least one fallback sentence is required"));
        }

        Ok(Self {
            min_chars,
            sentences,
        })
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn apply(&self, prompt: &str, text: String) -> String {
        if text.chars().count() >= self.min_chars {
            return text;
        }
        self.pick(prompt).to_string()
    }

    /// Same prompt, same sentence.
    pub fn pick(&self, prompt: &str) -> &str {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        let idx = (hasher.finish() % self.sentences.len() as u64) as usize;
        &self.sentences[idx]
    }
}
