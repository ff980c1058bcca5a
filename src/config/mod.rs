mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the upstream bearer token.
pub const TOKEN_ENV: &str = "HUGGING_FACE_TOKEN";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Builds the process configuration: YAML file (optional unless `CONFIG_PATH`
/// is set explicitly) plus the bearer token from the environment.
pub async fn load() -> Result<Config> {
    let (config_path, required) = match env::var("CONFIG_PATH") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let mut config = load_file(&config_path, required).await?;
    config.upstream.api_token = env::var(TOKEN_ENV).unwrap_or_default();
    config.validate()?;

    Ok(config)
}

pub async fn load_file(config_path: &str, required: bool) -> Result<Config> {
    if !required && !Path::new(config_path).exists() {
        debug!("No configuration file at {}, using defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty YAML document deserializes to unit, not to an empty map.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.upstream.api_token.trim().is_empty() {
            return Err(Error::config(format!("{} is not set", TOKEN_ENV)));
        }
        if !self.upstream.prompt_template.contains(crate::relay::PROMPT_PLACEHOLDER) {
            return Err(Error::config(format!(
                "prompt_template must contain {}",
                crate::relay::PROMPT_PLACEHOLDER
            )));
        }
        if self.relay.fallback_responses.iter().all(|s| s.trim().is_empty()) {
            return Err(Error::config("fallback_responses must not be empty"));
        }
        if self.relay.max_prompt_chars == 0 {
            return Err(Error::config("max_prompt_chars must be positive"));
        }
        Ok(())
    }
}
