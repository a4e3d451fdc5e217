//! OpenAI vision client

use super::config::OpenAiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Narrow seam over the vision provider so handlers can run against a
/// deterministic stub in tests.
#[async_trait]
pub trait VisionCompletion: Send + Sync {
    /// Send one multimodal prompt (text + image reference) and return the
    /// raw text of the single completion.
    async fn complete_vision_prompt(
        &self,
        prompt: &str,
        image_ref: &str,
    ) -> Result<String, ProviderError>;
}

/// OpenAI chat-completions vision client
pub struct OpenAiVisionClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiVisionClient {
    /// Create a new client
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl VisionCompletion for OpenAiVisionClient {
    async fn complete_vision_prompt(
        &self,
        prompt: &str,
        image_ref: &str,
    ) -> Result<String, ProviderError> {
        let request_body = json!({
            "model": self.config.model,
            "response_format": { "type": "json_object" },
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": prompt },
                        { "type": "image_url", "image_url": { "url": image_ref } },
                    ],
                },
            ],
            "max_tokens": self.config.max_tokens,
        });

        debug!("Calling vision completion API: model={}", self.config.model);

        let mut req = self.http.post(&self.config.api_url).json(&request_body);

        if let Some(api_key) = &self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Upstream(format!(
                "Status {}: {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("no choices returned".to_string()))?;

        Ok(choice.message.content)
    }
}

// Response types for the chat completions API
#[derive(Debug, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompletionMessage {
    content: String,
}
