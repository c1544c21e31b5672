//! Completion service adapter.
//!
//! Talks to an OpenAI-compatible chat completions endpoint. Each call is a
//! single attempt; failed runs are meant to be re-run by CI.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::CompletionConfig;
use crate::error::{SummaryError, SummaryResult};

/// Text-completion collaborator.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate text for a single-turn prompt.
    async fn complete(&self, prompt: &str) -> SummaryResult<String>;
}

/// Client for OpenAI-compatible chat completion APIs.
pub struct OpenAiClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> SummaryResult<Self> {
        Ok(Self::new(CompletionConfig::from_env()?))
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request body for `prompt`.
    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> SummaryResult<String> {
        let url = self.config.completions_url();
        let request = self.build_request(prompt);
        debug!(
            "Requesting completion from {} (model {}, {} prompt chars)",
            url,
            request.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SummaryError::Request(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummaryError::Request(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            error!("Completion API responded with status {}", status);
            return Err(SummaryError::api(status.as_u16(), api_error_message(&body)));
        }

        parse_completion(&body)
    }
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for std::sync::Arc<T> {
    async fn complete(&self, prompt: &str) -> SummaryResult<String> {
        (**self).complete(prompt).await
    }
}

/// Extract the first choice's text from a completion response body.
pub fn parse_completion(body: &str) -> SummaryResult<String> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(SummaryError::EmptyCompletion)
}

/// Best-effort message from an error response body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}
