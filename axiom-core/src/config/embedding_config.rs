use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "api" or "hashed".
    pub provider: String,
    /// Embedding dimensions. Must match the store's collection dimension
    /// for the lifetime of that collection.
    pub dimensions: usize,
    /// API endpoint (OpenAI-compatible `/v1/embeddings`).
    pub endpoint: String,
    /// Model name sent to the API provider.
    pub model: String,
    /// Bearer token for the API provider. Empty means unauthenticated.
    pub api_key: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Max retries before the provider flips to unavailable.
    pub max_retries: u32,
    /// Enable the in-memory embedding cache.
    pub cache_enabled: bool,
    /// Max entries in the embedding cache.
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key: String::new(),
            timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            cache_enabled: defaults::DEFAULT_EMBEDDING_CACHE_ENABLED,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
