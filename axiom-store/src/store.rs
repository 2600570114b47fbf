//! The lifecycle-aware store engine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use axiom_core::errors::{AxiomResult, ValidationError};
use axiom_core::models::{DocumentRecord, LifecycleMetadata, SearchHit};
use axiom_core::traits::IVectorIndex;

/// Persists document records with governance metadata and answers
/// nearest-neighbor queries restricted to non-expired records.
///
/// Similarity search itself is delegated to the index collaborator; this
/// engine owns id assignment, the epoch derivation, and the expiry filter.
/// Expiry is enforced lazily at read time; nothing is physically removed.
pub struct LifecycleVectorStore {
    index: Arc<dyn IVectorIndex>,
    dimensions: usize,
}

impl LifecycleVectorStore {
    pub fn new(index: Arc<dyn IVectorIndex>, dimensions: usize) -> Self {
        Self { index, dimensions }
    }

    /// Idempotent collection setup. Safe to call repeatedly and under
    /// concurrent first-time initialization: the index adapter treats
    /// already-exists as success.
    pub fn ensure_collection(&self) -> AxiomResult<()> {
        self.index.ensure_collection(self.dimensions)
    }

    /// Write a new record. Always an insert: a fresh id is assigned and no
    /// existing record is ever looked up or overwritten, so retries by the
    /// caller create duplicates rather than updates.
    pub fn upsert(
        &self,
        text: &str,
        vector: Vec<f32>,
        metadata: LifecycleMetadata,
    ) -> AxiomResult<String> {
        if vector.len() != self.dimensions {
            return Err(ValidationError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        let record = DocumentRecord {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            vector,
            valid_until_epoch: metadata.valid_until.timestamp(),
            metadata,
        };

        self.index.upsert(&record)?;
        info!(
            id = %record.id,
            valid_until_epoch = record.valid_until_epoch,
            source = record.metadata.source_type.as_str(),
            "record stored"
        );
        Ok(record.id)
    }

    /// Lifecycle-aware search: only records with `valid_until_epoch`
    /// strictly in the future can appear, ordered by descending similarity.
    /// This is a hard correctness property, not best-effort filtering.
    pub fn search(&self, query_vector: &[f32], limit: usize) -> AxiomResult<Vec<SearchHit>> {
        let now = Utc::now().timestamp();
        let points = self.index.search(query_vector, now, limit)?;
        debug!(hits = points.len(), now, "lifecycle search");

        Ok(points
            .into_iter()
            .map(|p| SearchHit {
                id: p.id,
                score: p.score,
                text: p.text,
                metadata: p.metadata,
            })
            .collect())
    }
}
