//! Server configuration.

use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the move server.
///
/// Everything has a default tuned for the Groq deployment; the only required
/// external input is the provider API key, supplied via environment variable
/// (loaded from `.env` by the binary).
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// LLM provider (groq, openai, or anthropic).
    #[serde(default = "default_provider")]
    llm_provider: LlmProvider,

    /// LLM model identifier.
    #[serde(default = "default_model")]
    llm_model: String,

    /// Maximum tokens for LLM responses.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,
}

fn default_provider() -> LlmProvider {
    LlmProvider::Groq
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_max_tokens() -> u32 {
    150
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(model = %config.llm_model, "Config loaded successfully");
        Ok(config)
    }

    /// Creates LLM configuration from this server config.
    ///
    /// Requires the provider-matching API key environment variable
    /// (`GROQ_API_KEY`, `OPENAI_API_KEY`, or `ANTHROPIC_API_KEY`).
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        debug!("Creating LLM config");

        let api_key = match self.llm_provider {
            LlmProvider::Groq => std::env::var("GROQ_API_KEY").map_err(|_| {
                ConfigError::new("GROQ_API_KEY environment variable not set".to_string())
            })?,
            LlmProvider::OpenAI => std::env::var("OPENAI_API_KEY").map_err(|_| {
                ConfigError::new("OPENAI_API_KEY environment variable not set".to_string())
            })?,
            LlmProvider::Anthropic => std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                ConfigError::new("ANTHROPIC_API_KEY environment variable not set".to_string())
            })?,
        };

        Ok(LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_groq() {
        let config = ServerConfig::default();
        assert_eq!(*config.llm_provider(), LlmProvider::Groq);
        assert_eq!(config.llm_model(), "llama-3.1-8b-instant");
        assert_eq!(*config.llm_max_tokens(), 150);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: ServerConfig = toml::from_str(r#"llm_provider = "anthropic""#).unwrap();
        assert_eq!(*config.llm_provider(), LlmProvider::Anthropic);
        assert_eq!(config.llm_model(), "llama-3.1-8b-instant");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let result: Result<ServerConfig, _> = toml::from_str(r#"llm_provider = "bedrock""#);
        assert!(result.is_err());
    }
}
