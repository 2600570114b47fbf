use serde::{Deserialize, Serialize};

use super::defaults;

/// Governance gate configuration. Each ingestion path carries its own
/// acceptance threshold: extracted file text tends to contain more
/// boilerplate, so it gets a higher bar than direct text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum density score for raw-text ingestion.
    pub raw_text_threshold: f64,
    /// Minimum density score for extracted-file ingestion.
    pub extracted_file_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            raw_text_threshold: defaults::DEFAULT_RAW_TEXT_THRESHOLD,
            extracted_file_threshold: defaults::DEFAULT_EXTRACTED_FILE_THRESHOLD,
        }
    }
}
