//! # axiom-analysis
//!
//! Built-in fallback implementation of the linguistic-analysis collaborator.
//! The scorer and redactor consume `ILinguisticAnalyzer` from axiom-core and
//! never depend on this crate's internals, so a real NLP service can be
//! substituted without touching them.

mod analyzer;
pub mod stopwords;
mod token;

pub use analyzer::HeuristicAnalyzer;
