//! Qdrant REST adapter for the nearest-neighbor collaborator.
//!
//! Collections are fixed-dimension cosine indexes keyed by record id, with
//! `valid_until_epoch` as a filterable numeric payload field. All requests
//! are bounded by the configured timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use axiom_core::config::StoreConfig;
use axiom_core::errors::{AxiomResult, StorageError};
use axiom_core::models::{DocumentRecord, LifecycleMetadata};
use axiom_core::traits::{IVectorIndex, ScoredPoint};

/// Payload stored alongside each vector.
#[derive(Serialize, Deserialize)]
struct Payload {
    text: String,
    valid_until_epoch: i64,
    #[serde(flatten)]
    metadata: LifecycleMetadata,
}

#[derive(Deserialize)]
struct SearchResponse {
    result: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    id: serde_json::Value,
    score: f32,
    payload: Payload,
}

/// HTTP client for a Qdrant-compatible index backend.
pub struct QdrantIndex {
    base_url: String,
    collection: String,
    timeout: Duration,
}

impl QdrantIndex {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/collections/{}", self.base_url, self.collection)
    }

    fn map_transport_err(&self, e: reqwest::Error) -> StorageError {
        if e.is_timeout() {
            StorageError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            StorageError::ConnectionFailed {
                reason: e.to_string(),
            }
        }
    }

    /// Run one request on a current-thread runtime; the trait surface is
    /// blocking while the transport stays async.
    fn block_on<F, T>(&self, fut: F) -> Result<T, StorageError>
    where
        F: std::future::Future<Output = Result<T, StorageError>>,
    {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StorageError::ConnectionFailed {
                reason: format!("runtime error: {e}"),
            })?;
        rt.block_on(fut)
    }

    fn client(&self) -> Result<reqwest::Client, StorageError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| StorageError::ConnectionFailed {
                reason: format!("client error: {e}"),
            })
    }
}

impl IVectorIndex for QdrantIndex {
    fn ensure_collection(&self, dimensions: usize) -> AxiomResult<()> {
        let url = self.collection_url();
        let body = json!({
            "vectors": { "size": dimensions, "distance": "Cosine" }
        });

        self.block_on(async {
            let client = self.client()?;

            // Existence check first; creation only when absent.
            let exists = client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.map_transport_err(e))?
                .status()
                .is_success();
            if exists {
                return Ok(());
            }

            let response = client
                .put(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| self.map_transport_err(e))?;

            // A concurrent caller may have created it between the check and
            // the PUT; already-exists is success, not a failure.
            if response.status().is_success() || response.status() == 409 {
                debug!(collection = %self.collection, dimensions, "collection ready");
                return Ok(());
            }

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if text.contains("already exists") {
                return Ok(());
            }
            Err(StorageError::CollectionSetupFailed {
                collection: self.collection.clone(),
                reason: format!("{status}: {text}"),
            })
        })?;
        Ok(())
    }

    fn upsert(&self, record: &DocumentRecord) -> AxiomResult<()> {
        let url = format!("{}/points?wait=true", self.collection_url());
        let payload = Payload {
            text: record.text.clone(),
            valid_until_epoch: record.valid_until_epoch,
            metadata: record.metadata.clone(),
        };
        let body = json!({
            "points": [{
                "id": record.id,
                "vector": record.vector,
                "payload": payload,
            }]
        });

        self.block_on(async {
            let response = self
                .client()?
                .put(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| self.map_transport_err(e))?;

            if response.status().is_success() {
                Ok(())
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                Err(StorageError::WriteFailed {
                    id: record.id.clone(),
                    reason: format!("{status}: {text}"),
                })
            }
        })?;
        Ok(())
    }

    fn search(
        &self,
        vector: &[f32],
        valid_after_epoch: i64,
        limit: usize,
    ) -> AxiomResult<Vec<ScoredPoint>> {
        let url = format!("{}/points/search", self.collection_url());
        let body = json!({
            "vector": vector,
            "limit": limit,
            "with_payload": true,
            "filter": {
                "must": [{
                    "key": "valid_until_epoch",
                    "range": { "gt": valid_after_epoch }
                }]
            }
        });

        let hits = self.block_on(async {
            let response = self
                .client()?
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| self.map_transport_err(e))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(StorageError::SearchFailed {
                    reason: format!("{status}: {text}"),
                });
            }

            response
                .json::<SearchResponse>()
                .await
                .map_err(|e| StorageError::SearchFailed {
                    reason: format!("malformed response: {e}"),
                })
        })?;

        Ok(hits
            .result
            .into_iter()
            .map(|r| ScoredPoint {
                id: match r.id {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                },
                score: r.score,
                text: r.payload.text,
                metadata: r.payload.metadata,
            })
            .collect())
    }
}
