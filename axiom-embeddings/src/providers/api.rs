//! HTTP API embedding provider (OpenAI-compatible `/v1/embeddings`).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use axiom_core::config::EmbeddingConfig;
use axiom_core::errors::{AxiomResult, EmbeddingError};
use axiom_core::traits::IEmbeddingProvider;

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

/// Remote embedding provider with bounded retry and an availability latch.
/// After exhausting retries the provider reports unavailable until reset,
/// so callers can fail fast instead of re-paying the backoff.
pub struct ApiEmbedder {
    endpoint: String,
    model: String,
    api_key: String,
    dimensions: usize,
    timeout: Duration,
    max_retries: u32,
    available: AtomicBool,
}

impl ApiEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            dimensions: config.dimensions,
            timeout: Duration::from_millis(config.timeout_ms),
            max_retries: config.max_retries,
            available: AtomicBool::new(true),
        }
    }

    /// Re-enable after a config change or health check.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    fn request_embeddings(&self, texts: Vec<String>) -> AxiomResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let body = EmbedRequest {
            model: self.model.clone(),
            input: texts,
        };

        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                std::thread::sleep(delay);
                debug!(attempt, "retrying embedding request");
            }

            match self.send_request(&body) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        self.available.store(false, Ordering::Relaxed);
        Err(last_err.unwrap_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "all retries exhausted".to_string(),
            }
            .into()
        }))
    }

    /// One HTTP round trip. The trait surface is blocking, so the async
    /// transport runs on a current-thread runtime.
    fn send_request(&self, body: &EmbedRequest) -> AxiomResult<Vec<Vec<f32>>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("runtime error: {e}"),
            })?;

        rt.block_on(async {
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("client error: {e}"),
                })?;

            let response = client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(body)
                .send()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("HTTP error: {e}"),
                })?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("API returned {status}: {text}"),
                }
                .into());
            }

            let parsed: EmbedResponse =
                response
                    .json()
                    .await
                    .map_err(|e| EmbeddingError::InferenceFailed {
                        reason: format!("JSON parse error: {e}"),
                    })?;

            parsed
                .data
                .into_iter()
                .map(|d| {
                    if d.embedding.len() != self.dimensions {
                        Err(EmbeddingError::DimensionMismatch {
                            expected: self.dimensions,
                            actual: d.embedding.len(),
                        }
                        .into())
                    } else {
                        Ok(d.embedding)
                    }
                })
                .collect()
        })
    }
}

impl IEmbeddingProvider for ApiEmbedder {
    fn embed(&self, text: &str) -> AxiomResult<Vec<f32>> {
        let mut vectors = self.request_embeddings(vec![text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> AxiomResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts.to_vec())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "api"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
