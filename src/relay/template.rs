use crate::{Error, Result};

pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Fixed text wrapped around the user prompt before it is sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    prefix: String,
    suffix: String,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Result<Self> {
        let (prefix, suffix) = template.split_once(PROMPT_PLACEHOLDER).ok_or_else(|| {
            Error::config(format!(
                "prompt template must contain {}",
                PROMPT_PLACEHOLDER
            ))
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn render(&self, prompt: &str) -> String {
        format!("{}{}{}", self.prefix, prompt, self.suffix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_penguin_template() {
        let template = PromptTemplate::new("A penguin expert answering: \"{prompt}\"").unwrap();
        assert_eq!(
            template.render("Can penguins fly?"),
            "A penguin expert answering: \"Can penguins fly?\""
        );
        assert_eq!(template.prefix(), "A penguin expert answering: \"");
        assert_eq!(template.suffix(), "\"");
    }

    #[test]
    fn test_render_chat_template() {
        let template = PromptTemplate::new("User: {prompt}\nBot:").unwrap();
        assert_eq!(template.render("hi"), "User: hi\nBot:");
    }

    #[test]
    fn test_bare_placeholder() {
        let template = PromptTemplate::new("{prompt}").unwrap();
        assert_eq!(template.render("as is"), "as is");
        assert!(template.prefix().is_empty());
    }

    #[test]
    fn test_missing_placeholder() {
        assert!(PromptTemplate::new("User: hello").is_err());
    }
}
