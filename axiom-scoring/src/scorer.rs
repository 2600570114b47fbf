//! Information-density scoring.
//!
//! The gate in front of the index: low-value content (headers, footers,
//! boilerplate, keyword noise) is rejected before it costs an embedding
//! call and index space.

use std::sync::Arc;

use tracing::trace;

use axiom_core::constants::{MIN_SCOREABLE_LENGTH, SCORE_DECIMAL_PLACES};
use axiom_core::errors::AxiomResult;
use axiom_core::traits::ILinguisticAnalyzer;

/// Computes a utility score for text content.
///
/// Holds no per-request state; one instance is shared across concurrent
/// requests. Deterministic given a fixed analyzer.
pub struct DensityScorer {
    analyzer: Arc<dyn ILinguisticAnalyzer>,
}

impl DensityScorer {
    pub fn new(analyzer: Arc<dyn ILinguisticAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Information-density score in [0.0, 1.0]: the ratio of content-bearing
    /// tokens (nouns, verbs, adjectives, proper nouns that are not stopwords,
    /// punctuation, or whitespace) to all tokens, rounded to 4 decimals.
    ///
    /// Empty or near-empty input scores 0.0 outright. Keyword lists approach
    /// 1.0; ordinary prose lands around 0.3–0.6.
    pub fn calculate_score(&self, text: &str) -> AxiomResult<f64> {
        if text.trim().chars().count() < MIN_SCOREABLE_LENGTH {
            return Ok(0.0);
        }

        let tokens = self.analyzer.analyze(text)?;
        let total = tokens.len();
        if total == 0 {
            return Ok(0.0);
        }

        let content = tokens.iter().filter(|t| t.is_content()).count();
        let density = content as f64 / total as f64;
        trace!(total, content, density, "scored text");

        let factor = 10f64.powi(SCORE_DECIMAL_PLACES as i32);
        Ok((density * factor).round() / factor)
    }

    /// Accept/reject helper against a caller-supplied threshold. The
    /// threshold is an ingestion-path policy value, never hard-coded here.
    pub fn is_passable(&self, text: &str, threshold: f64) -> AxiomResult<bool> {
        Ok(self.calculate_score(text)? >= threshold)
    }
}
