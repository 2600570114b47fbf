use serde::{Deserialize, Serialize};

use super::document::LifecycleMetadata;

/// One retrieval result. Lists of hits are ordered by descending score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    /// Cosine similarity to the query vector.
    pub score: f32,
    pub text: String,
    pub metadata: LifecycleMetadata,
}

impl SearchHit {
    /// Label used when presenting this hit as generation context:
    /// the filename when present, otherwise the source type.
    pub fn source_label(&self) -> &str {
        self.metadata
            .filename
            .as_deref()
            .unwrap_or_else(|| self.metadata.source_type.as_str())
    }
}
