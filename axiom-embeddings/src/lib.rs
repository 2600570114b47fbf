//! # axiom-embeddings
//!
//! Implementations of the embedding collaborator: an OpenAI-compatible HTTP
//! provider, a deterministic hashed fallback, and a read-through cache.
//! The embedding is always computed over already-redacted text; callers
//! upstream guarantee raw PII never reaches a provider.

mod cache;
pub mod providers;

pub use cache::CachedEmbedder;
pub use providers::{ApiEmbedder, HashedEmbedder};

use std::sync::Arc;

use axiom_core::config::EmbeddingConfig;
use axiom_core::errors::{AxiomResult, EmbeddingError};
use axiom_core::traits::IEmbeddingProvider;

/// Build the configured embedding provider, wrapped in the cache when
/// enabled.
pub fn build_provider(config: &EmbeddingConfig) -> AxiomResult<Arc<dyn IEmbeddingProvider>> {
    let inner: Arc<dyn IEmbeddingProvider> = match config.provider.as_str() {
        "api" => Arc::new(ApiEmbedder::new(config)),
        "hashed" => Arc::new(HashedEmbedder::new(config.dimensions)),
        other => {
            return Err(EmbeddingError::UnknownProvider {
                provider: other.to_string(),
            }
            .into())
        }
    };

    if config.cache_enabled {
        Ok(Arc::new(CachedEmbedder::new(inner, config.cache_size)))
    } else {
        Ok(inner)
    }
}
