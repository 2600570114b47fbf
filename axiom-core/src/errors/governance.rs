use serde::{Deserialize, Serialize};

/// Refusal to ingest content whose quality score is below the acceptance
/// threshold for its ingestion path. Carries both numbers so the caller can
/// explain the rejection. No record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("content rejected: information density {score} is below the {threshold} threshold")]
pub struct GovernanceRejection {
    /// The computed quality score.
    pub score: f64,
    /// The acceptance threshold for the ingestion path that rejected it.
    pub threshold: f64,
}
