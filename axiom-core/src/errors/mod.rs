//! Error taxonomy for the governance pipeline.
//!
//! Each subsystem has its own `thiserror` enum; `AxiomError` aggregates them.
//! `ValidationError` and `GovernanceRejection` are expected, client-facing
//! outcomes of the gate — callers must not log them as errors. `StorageError`
//! and collaborator failures are operational and retryable.

mod analysis_error;
mod embedding_error;
mod generation_error;
mod governance;
mod storage_error;
mod validation_error;

pub use analysis_error::AnalysisError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use governance::GovernanceRejection;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Result alias used across the workspace.
pub type AxiomResult<T> = Result<T, AxiomError>;

/// Top-level error for all Axiom operations.
#[derive(Debug, thiserror::Error)]
pub enum AxiomError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Governance(#[from] GovernanceRejection),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl AxiomError {
    /// Whether retrying the same operation may succeed.
    /// Governance and validation outcomes are final for a given input.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AxiomError::Storage(_) | AxiomError::Embedding(_) | AxiomError::Generation(_)
        )
    }

    /// Whether this is an expected gate outcome rather than a failure.
    pub fn is_gate_outcome(&self) -> bool {
        matches!(self, AxiomError::Validation(_) | AxiomError::Governance(_))
    }
}
