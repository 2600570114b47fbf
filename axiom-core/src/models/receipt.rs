use serde::{Deserialize, Serialize};

/// Returned to the caller after a successful ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReceipt {
    /// Id of the newly created record.
    pub id: String,
    /// The score that passed the gate.
    pub quality_score: f64,
    /// Whether redaction changed the text.
    pub was_redacted: bool,
}
