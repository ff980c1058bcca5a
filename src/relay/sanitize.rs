//! Cleanup applied to generated text before it reaches the caller.
//!
//! The pipeline is `strip_echo -> strip_quotes -> trim`. Everything here is
//! pure so it can be exercised without an upstream.

use super::template::PromptTemplate;

const QUOTES: &[char] = &['"', '\u{201c}', '\u{201d}'];

#[derive(Debug, Clone)]
pub struct Sanitizer {
    template: PromptTemplate,
}

impl Sanitizer {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn clean(&self, prompt: &str, raw: &str) -> String {
        let text = self.strip_echo(prompt, raw);
        let text = strip_quotes(text);
        text.trim().to_string()
    }

    /// Drops the rendered input when the model repeats it ahead of its answer.
    pub fn strip_echo<'a>(&self, prompt: &str, raw: &'a str) -> &'a str {
        let text = raw.trim_start();

        let rendered = self.template.render(prompt);
        if let Some(rest) = text.strip_prefix(rendered.trim()) {
            return rest;
        }

        let prefix = self.template.prefix().trim();
        if prefix.is_empty() {
            return text;
        }
        let Some(rest) = text.strip_prefix(prefix) else {
            return text;
        };

        // Prefix echoed but the prompt came back altered; keep what follows
        // the first closing suffix if there is one.
        let rest = rest.trim_start();
        let rest = rest.strip_prefix(prompt).unwrap_or(rest);
        let suffix = self.template.suffix().trim();
        if suffix.is_empty() {
            return rest;
        }
        match rest.find(suffix) {
            Some(idx) => &rest[idx + suffix.len()..],
            None => rest,
        }
    }
}

pub fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(QUOTES)
}
