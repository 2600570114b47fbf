//! # axiom-privacy
//!
//! Redaction of personally identifiable information before text enters the
//! storage layer. Hybrid approach: regex for structural entities (emails,
//! phone numbers), the linguistic-analysis collaborator for semantic
//! entities (people, organizations, locations), with an organizational
//! allow-list that shields brand terms from entity redaction.

mod allowlist;
mod engine;
pub mod patterns;
pub mod spans;

pub use allowlist::AllowList;
pub use engine::{PatternFailure, RedactedText, Redaction, RedactionEngine};
