use serde::{Deserialize, Serialize};

use crate::errors::AxiomResult;
use crate::models::{DocumentRecord, LifecycleMetadata};

/// A stored point as returned by the index with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub id: String,
    pub score: f32,
    pub text: String,
    pub metadata: LifecycleMetadata,
}

/// Nearest-neighbor index collaborator. Axiom does not implement similarity
/// search itself; the store delegates to an implementation of this trait
/// (Qdrant over HTTP in production, a linear scan in tests).
pub trait IVectorIndex: Send + Sync {
    /// Idempotent collection setup: verify a fixed-dimension cosine index
    /// exists, creating it if absent. Must tolerate a concurrent caller
    /// having created it first.
    fn ensure_collection(&self, dimensions: usize) -> AxiomResult<()>;

    /// Write one full record. The id is already assigned by the caller.
    fn upsert(&self, record: &DocumentRecord) -> AxiomResult<()>;

    /// Return up to `limit` nearest neighbors of `vector`, ordered by
    /// descending similarity, restricted to points with
    /// `valid_until_epoch > valid_after_epoch`.
    fn search(
        &self,
        vector: &[f32],
        valid_after_epoch: i64,
        limit: usize,
    ) -> AxiomResult<Vec<ScoredPoint>>;
}
