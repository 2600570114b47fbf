use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector store / index backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the Qdrant-compatible index backend.
    pub url: String,
    /// Collection name. Keyed by record id, cosine similarity,
    /// `valid_until_epoch` filterable.
    pub collection: String,
    /// Request timeout in milliseconds for index operations.
    pub timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_INDEX_URL.to_string(),
            collection: defaults::DEFAULT_COLLECTION_NAME.to_string(),
            timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
