//! # axiom-store
//!
//! Lifecycle-aware vector storage. Every record carries `valid_until` and a
//! redundant `valid_until_epoch`; retrieval filters on the epoch at query
//! time so expired records never surface. Similarity search is delegated to
//! an `IVectorIndex` collaborator (Qdrant over HTTP in production).

mod qdrant;
mod store;

pub use qdrant::QdrantIndex;
pub use store::LifecycleVectorStore;
