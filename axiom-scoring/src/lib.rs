//! # axiom-scoring
//!
//! The content-quality gate: rejects low-information text before it enters
//! the semantic index.

mod scorer;

pub use scorer::DensityScorer;
