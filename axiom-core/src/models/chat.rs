use serde::{Deserialize, Serialize};

use super::search::SearchHit;

/// Result of a retrieval-augmented chat request. When generation is
/// unavailable the context is still returned with a fallback answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub context: Vec<SearchHit>,
}
