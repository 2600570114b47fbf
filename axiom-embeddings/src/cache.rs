//! Read-through embedding cache.
//!
//! Embedding the same redacted text twice is pure waste; the cache is keyed
//! by blake3 content hash so identical inputs resolve without a provider
//! call. Wraps any provider transparently.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use axiom_core::errors::AxiomResult;
use axiom_core::traits::IEmbeddingProvider;

/// Decorator that caches the inner provider's output in memory.
pub struct CachedEmbedder {
    inner: Arc<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
}

impl CachedEmbedder {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>, max_entries: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    fn content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    /// Number of cached entries.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IEmbeddingProvider for CachedEmbedder {
    fn embed(&self, text: &str) -> AxiomResult<Vec<f32>> {
        let key = Self::content_hash(text);
        if let Some(hit) = self.cache.get(&key) {
            trace!(%key, "embedding cache hit");
            return Ok(hit);
        }
        let vector = self.inner.embed(text)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
