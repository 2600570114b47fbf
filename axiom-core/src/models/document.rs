use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a record's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Submitted directly as text.
    RawText,
    /// Extracted from an uploaded binary file.
    ExtractedFile,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::RawText => "raw_text",
            SourceType::ExtractedFile => "extracted_file",
        }
    }
}

/// Governance and lifecycle metadata attached to every record at ingestion.
/// A fixed structured record, not an open-ended key/value bag, so the two
/// ingestion paths cannot drift apart in schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleMetadata {
    /// Identifier of the responsible submitter. Required, non-empty.
    pub owner: String,
    /// Taxonomy tags. May be empty.
    pub tags: Vec<String>,
    /// Information-density score in [0.0, 1.0], computed at ingestion and
    /// never recomputed. Always at or above the path's acceptance threshold,
    /// otherwise the record was never created.
    pub quality_score: f64,
    /// Absolute expiry. Always populated: absent caller values default to
    /// ingestion time + 365 days before the record is built.
    pub valid_until: DateTime<Utc>,
    /// Origin of the text.
    pub source_type: SourceType,
    /// Length of the redacted text, for auditing.
    pub cleaned_length: usize,
    /// Original filename for extracted-file records.
    pub filename: Option<String>,
}

/// The unit of storage. Insert-only: a record is never mutated after it is
/// written; corrections create a new record under a new id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Redacted content. Raw unredacted input is never stored.
    pub text: String,
    /// Fixed-dimension embedding of the redacted text.
    pub vector: Vec<f32>,
    /// `metadata.valid_until` as epoch seconds, stored redundantly for
    /// efficient range filtering at query time.
    pub valid_until_epoch: i64,
    pub metadata: LifecycleMetadata,
}
