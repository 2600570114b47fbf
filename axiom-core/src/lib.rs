//! # axiom-core
//!
//! Foundation crate for the Axiom knowledge governance pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AxiomConfig;
pub use errors::{AxiomError, AxiomResult};
pub use models::{
    ChatResponse, DocumentRecord, IngestReceipt, LifecycleMetadata, SearchHit, SourceType,
};
