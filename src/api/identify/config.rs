//! Configuration for the OpenAI vision provider

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI vision client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Chat completions endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key (read from env OPENAI_API_KEY if not set)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Vision-capable model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens in the completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

// Default value functions
fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "gpt-4-vision-preview".to_string()
}
fn default_max_tokens() -> u32 {
    800
}
fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl OpenAiConfig {
    /// Load configuration from environment variables
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("OPENAI_API_URL") {
            self.api_url = val;
        }

        if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.api_key = Some(val);
        }

        if let Ok(val) = std::env::var("OPENAI_VISION_MODEL") {
            self.model = val;
        }

        if let Ok(val) = std::env::var("OPENAI_MAX_TOKENS") {
            if let Ok(max) = val.parse() {
                self.max_tokens = max;
            }
        }

        if let Ok(val) = std::env::var("OPENAI_TIMEOUT_MS") {
            if let Ok(timeout) = val.parse() {
                self.timeout_ms = timeout;
            }
        }

        self
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
