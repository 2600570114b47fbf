//! # axiom-pipeline
//!
//! Orchestration for the governed knowledge base. Ingestion runs every
//! submission through score, gate, redact, embed, and store in that fixed
//! order; retrieval embeds the question, searches currently-valid records,
//! and optionally synthesizes an answer grounded in what was found.

mod extraction;
mod generation;
mod ingestion;
mod retrieval;
mod telemetry;

pub use extraction::PlainTextExtractor;
pub use generation::OpenAiGenerator;
pub use ingestion::{GatePolicy, IngestRequest, IngestionPipeline};
pub use retrieval::RetrievalPipeline;
pub use telemetry::{init_tracing, init_tracing_with_filter};
