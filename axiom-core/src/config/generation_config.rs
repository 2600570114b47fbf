use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer-generation collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Whether a generation provider is configured at all. When false,
    /// `chat` returns retrieved context with a fallback answer.
    pub enabled: bool,
    /// API endpoint (OpenAI-compatible `/v1/chat/completions`).
    pub endpoint: String,
    /// Model name.
    pub model: String,
    /// Bearer token.
    pub api_key: String,
    /// Sampling temperature. Kept low: answers must stay grounded in context.
    pub temperature: f64,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key: String::new(),
            temperature: defaults::DEFAULT_GENERATION_TEMPERATURE,
            timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
