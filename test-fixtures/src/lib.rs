//! Shared test collaborators for the Axiom workspace.
//!
//! Swappable stand-ins for the external collaborators: an in-memory vector
//! index, a deterministic embedder, and scripted/failing generation
//! providers. Tests across crates inject these through the same traits the
//! production adapters implement.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use axiom_core::errors::{AxiomResult, GenerationError};
use axiom_core::models::DocumentRecord;
use axiom_core::traits::{IGenerationProvider, IVectorIndex, ScoredPoint};

pub use axiom_embeddings::HashedEmbedder;

/// In-memory nearest-neighbor index: linear cosine scan honoring the expiry
/// filter. Plays the role Qdrant plays in production.
#[derive(Default)]
pub struct MemoryVectorIndex {
    records: Mutex<Vec<DocumentRecord>>,
    ensure_calls: AtomicUsize,
}

impl MemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `ensure_collection` ran (idempotency assertions).
    pub fn ensure_calls(&self) -> usize {
        self.ensure_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("index lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na * nb)
    }
}

impl IVectorIndex for MemoryVectorIndex {
    fn ensure_collection(&self, _dimensions: usize) -> AxiomResult<()> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn upsert(&self, record: &DocumentRecord) -> AxiomResult<()> {
        self.records
            .lock()
            .expect("index lock poisoned")
            .push(record.clone());
        Ok(())
    }

    fn search(
        &self,
        vector: &[f32],
        valid_after_epoch: i64,
        limit: usize,
    ) -> AxiomResult<Vec<ScoredPoint>> {
        let records = self.records.lock().expect("index lock poisoned");
        let mut hits: Vec<ScoredPoint> = records
            .iter()
            .filter(|r| r.valid_until_epoch > valid_after_epoch)
            .map(|r| ScoredPoint {
                id: r.id.clone(),
                score: cosine(vector, &r.vector),
                text: r.text.clone(),
                metadata: r.metadata.clone(),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Generation provider returning a canned answer and counting invocations,
/// so tests can assert the no-match short-circuit never calls it.
pub struct ScriptedGenerator {
    pub answer: String,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IGenerationProvider for ScriptedGenerator {
    fn generate(
        &self,
        _system_prompt: &str,
        _context: &str,
        _question: &str,
    ) -> AxiomResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Generation provider that always errors, for degraded-path tests.
pub struct FailingGenerator;

impl IGenerationProvider for FailingGenerator {
    fn generate(
        &self,
        _system_prompt: &str,
        _context: &str,
        _question: &str,
    ) -> AxiomResult<String> {
        Err(GenerationError::RequestFailed {
            reason: "simulated outage".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Fixture texts shared by scoring and pipeline tests.
pub mod texts {
    /// Content-rich prose that clears the raw-text threshold.
    pub const HIGH_DENSITY: &str = "UPM Biofore is leading the forest-based bioindustry \
         into a sustainable, innovation-driven future.";

    /// Stopword/punctuation soup that scores 0.0.
    pub const LOW_DENSITY: &str =
        "the a an and or but if with at from to of in on by ,,, ;;; ... !!!";
}
