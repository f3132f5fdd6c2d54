//! LLM API client abstraction for Groq, OpenAI, and Anthropic.

use async_openai::{
    Client as OpenAIClient,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Base URL for Groq's OpenAI-compatible endpoint.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// LLM provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Groq (OpenAI-compatible API, fast open-weight models).
    Groq,
    /// OpenAI (GPT models).
    OpenAI,
    /// Anthropic (Claude models).
    Anthropic,
}

/// Configuration for LLM client.
#[derive(Debug, Clone, Getters)]
pub struct LlmConfig {
    /// The provider to call.
    provider: LlmProvider,
    /// API key for the provider.
    api_key: String,
    /// Model identifier.
    model: String,
    /// Maximum tokens per completion.
    max_tokens: u32,
}

impl LlmConfig {
    /// Creates a new LLM configuration.
    #[instrument(skip(api_key), fields(provider = ?provider, model = %model))]
    pub fn new(provider: LlmProvider, api_key: String, model: String, max_tokens: u32) -> Self {
        debug!("Creating LLM config");
        Self {
            provider,
            api_key,
            model,
            max_tokens,
        }
    }
}

/// One-shot prompt completion.
///
/// The seam between the HTTP handler and the outside world; tests implement
/// this with stubs so the handler can run without a provider.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Sends `prompt` as the sole user message and returns the completion
    /// text, trimmed of surrounding whitespace.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// LLM client that abstracts over multiple providers.
#[derive(Debug, Clone)]
pub struct LlmClient {
    config: LlmConfig,
}

impl LlmClient {
    /// Creates a new LLM client.
    #[instrument(skip(config), fields(provider = ?config.provider()))]
    pub fn new(config: LlmConfig) -> Self {
        info!("Creating LLM client");
        Self { config }
    }

    /// Generates a completion using an OpenAI-compatible chat endpoint.
    ///
    /// Groq speaks the OpenAI wire protocol, so both providers share this
    /// path; only the API base differs.
    #[instrument(skip(self, prompt), fields(prompt_length = prompt.len()))]
    async fn complete_openai_compatible(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Creating OpenAI-compatible client");

        let mut openai_config = OpenAIConfig::new().with_api_key(self.config.api_key().clone());
        if *self.config.provider() == LlmProvider::Groq {
            openai_config = openai_config.with_api_base(GROQ_API_BASE);
        }
        let client = OpenAIClient::with_config(openai_config);

        debug!("Building chat completion request");
        let messages = vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| {
                    error!(error = ?e, "Failed to build user message");
                    LlmError::new(format!("Failed to build user message: {}", e))
                })?,
        )];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.config.model())
            .messages(messages)
            .max_tokens(*self.config.max_tokens())
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build request");
                LlmError::new(format!("Failed to build request: {}", e))
            })?;

        debug!(provider = ?self.config.provider(), "Sending chat completion request");
        let response = client.chat().create(request).await.map_err(|e| {
            error!(error = ?e, "Chat completion API error");
            LlmError::new(format!("Chat completion API error: {}", e))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                error!("No content in completion response");
                LlmError::new("No content in completion response".to_string())
            })?;

        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }

    /// Generates a completion using Anthropic Claude.
    #[instrument(skip(self, prompt), fields(prompt_length = prompt.len()))]
    async fn complete_anthropic(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Creating Anthropic client");

        let client = reqwest::Client::new();

        debug!("Building Anthropic API request");
        let request_body = serde_json::json!({
            "model": self.config.model(),
            "max_tokens": self.config.max_tokens(),
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        debug!("Sending request to Anthropic");
        let response = client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", self.config.api_key().clone())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Anthropic API request failed");
                LlmError::new(format!("Anthropic API request failed: {}", e))
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Anthropic response");
            LlmError::new(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, response = %response_text, "Anthropic API error");
            return Err(LlmError::new(format!(
                "Anthropic API error {}: {}",
                status, response_text
            )));
        }

        debug!(response_length = response_text.len(), "Parsing Anthropic response");
        let response_json: serde_json::Value = serde_json::from_str(&response_text).map_err(|e| {
            error!(error = ?e, response = %response_text, "Failed to parse Anthropic response");
            LlmError::new(format!("Failed to parse response: {}", e))
        })?;

        let content = response_json["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                error!(response = %response_json, "No text content in Anthropic response");
                LlmError::new("No text content in Anthropic response".to_string())
            })?
            .to_string();

        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }
}

#[async_trait]
impl Completion for LlmClient {
    #[instrument(skip(self, prompt), fields(provider = ?self.config.provider(), model = %self.config.model()))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Generating completion");
        let content = match self.config.provider() {
            LlmProvider::Groq | LlmProvider::OpenAI => {
                self.complete_openai_compatible(prompt).await?
            }
            LlmProvider::Anthropic => self.complete_anthropic(prompt).await?,
        };
        Ok(content.trim().to_string())
    }
}

/// LLM client error.
#[derive(Debug, Clone, Display, Error)]
#[display("LLM error: {} at {}:{}", message, file, line)]
pub struct LlmError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LlmError {
    /// Creates a new LLM error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "LLM error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
