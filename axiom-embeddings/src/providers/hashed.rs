//! Hashed term-frequency fallback provider.
//!
//! Produces deterministic fixed-dimension vectors by hashing terms into
//! buckets and weighting by frequency. Not as semantically rich as a neural
//! model, but dependency-free and always available, so the pipeline stays
//! usable in air-gapped deployments and tests.

use std::collections::HashMap;

use axiom_core::errors::AxiomResult;
use axiom_core::traits::IEmbeddingProvider;

/// Deterministic fallback embedding provider.
pub struct HashedEmbedder {
    dimensions: usize,
}

impl HashedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Map a term to a bucket via blake3.
    fn bucket(term: &str, dims: usize) -> usize {
        let hash = blake3::hash(term.as_bytes());
        let bytes: [u8; 8] = hash.as_bytes()[..8].try_into().unwrap_or([0; 8]);
        (u64::from_le_bytes(bytes) as usize) % dims
    }

    /// Lowercased alphanumeric terms, two characters or longer.
    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = Self::terms(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return vec;
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in &counts {
            // Longer terms carry more information than short function words.
            let weight = (count / total) * (1.0 + (term.len() as f32).ln());
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedEmbedder {
    fn embed(&self, text: &str) -> AxiomResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_correct_dimension() {
        let e = HashedEmbedder::new(64);
        let a = e.embed("renewable diesel capacity").unwrap();
        let b = e.embed("renewable diesel capacity").unwrap();
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_l2_normalized() {
        let e = HashedEmbedder::new(64);
        let v = e.embed("pulp mill maintenance schedule").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn related_texts_are_closer_than_unrelated() {
        let e = HashedEmbedder::new(256);
        let base = e.embed("UPM Biofore forest bioindustry future").unwrap();
        let related = e.embed("forest bioindustry strategy at UPM").unwrap();
        let unrelated = e.embed("quarterly payroll ledger export").unwrap();

        let dot = |a: &[f32], b: &[f32]| -> f32 { a.iter().zip(b).map(|(x, y)| x * y).sum() };
        assert!(dot(&base, &related) > dot(&base, &unrelated));
    }

    #[test]
    fn empty_text_yields_zero_vector() {
        let e = HashedEmbedder::new(16);
        let v = e.embed("").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }
}
