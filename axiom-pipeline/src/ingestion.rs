//! The ingestion pipeline: score → gate → redact → embed → store.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use axiom_core::config::ScoringConfig;
use axiom_core::constants::DEFAULT_VALIDITY_DAYS;
use axiom_core::errors::{AxiomResult, GovernanceRejection, ValidationError};
use axiom_core::models::{IngestReceipt, LifecycleMetadata, SourceType};
use axiom_core::traits::{IEmbeddingProvider, IFileExtractor};
use axiom_privacy::RedactionEngine;
use axiom_scoring::DensityScorer;
use axiom_store::LifecycleVectorStore;

/// Per-path acceptance thresholds. Extracted file text carries more
/// boilerplate, so its bar is typically higher than raw text's.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    pub raw_text_threshold: f64,
    pub extracted_file_threshold: f64,
}

impl GatePolicy {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            raw_text_threshold: config.raw_text_threshold,
            extracted_file_threshold: config.extracted_file_threshold,
        }
    }

    fn threshold_for(&self, source: SourceType) -> f64 {
        match source {
            SourceType::RawText => self.raw_text_threshold,
            SourceType::ExtractedFile => self.extracted_file_threshold,
        }
    }
}

/// A raw-text ingestion request.
#[derive(Debug, Clone)]
pub struct IngestRequest {
    pub text: String,
    pub owner: String,
    pub tags: Vec<String>,
    /// Absent means ingestion time + 365 days. Never "forever".
    pub valid_until: Option<DateTime<Utc>>,
}

/// Orchestrates one ingestion per call:
/// `Received → Scored → {Rejected | Accepted} → Redacted → Embedded → Stored`.
///
/// No internal retries: storage failures are safe for the caller to retry,
/// but each successful retry creates a new record (the store is
/// insert-only), so retries must be deliberate.
pub struct IngestionPipeline {
    scorer: Arc<DensityScorer>,
    redactor: Arc<RedactionEngine>,
    embedder: Arc<dyn IEmbeddingProvider>,
    extractor: Option<Arc<dyn IFileExtractor>>,
    store: Arc<LifecycleVectorStore>,
    policy: GatePolicy,
}

impl IngestionPipeline {
    pub fn new(
        scorer: Arc<DensityScorer>,
        redactor: Arc<RedactionEngine>,
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<LifecycleVectorStore>,
        policy: GatePolicy,
    ) -> Self {
        Self {
            scorer,
            redactor,
            embedder,
            extractor: None,
            store,
            policy,
        }
    }

    /// Attach the file-extraction collaborator, enabling `ingest_file`.
    pub fn with_extractor(mut self, extractor: Arc<dyn IFileExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Ingest raw text under the raw-text threshold.
    pub fn ingest(&self, request: IngestRequest) -> AxiomResult<IngestReceipt> {
        self.run(
            &request.text,
            &request.owner,
            request.tags,
            request.valid_until,
            SourceType::RawText,
            None,
        )
    }

    /// Ingest an uploaded file: extract text, then run the same flow under
    /// the extracted-file threshold.
    pub fn ingest_file(
        &self,
        bytes: &[u8],
        owner: &str,
        tags: Vec<String>,
        filename: Option<String>,
    ) -> AxiomResult<IngestReceipt> {
        let extractor = self.extractor.as_ref().ok_or_else(|| {
            ValidationError::UnsupportedFormat {
                format: "binary file (no extractor configured)".to_string(),
            }
        })?;

        let text = extractor.extract(bytes)?;
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyExtraction.into());
        }

        self.run(&text, owner, tags, None, SourceType::ExtractedFile, filename)
    }

    fn run(
        &self,
        text: &str,
        owner: &str,
        tags: Vec<String>,
        valid_until: Option<DateTime<Utc>>,
        source_type: SourceType,
        filename: Option<String>,
    ) -> AxiomResult<IngestReceipt> {
        if owner.trim().is_empty() {
            return Err(ValidationError::MissingOwner.into());
        }
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText.into());
        }

        // Gate. A rejection is an expected outcome, not an error.
        let quality_score = self.scorer.calculate_score(text)?;
        let threshold = self.policy.threshold_for(source_type);
        if quality_score < threshold {
            debug!(quality_score, threshold, "content rejected by gate");
            return Err(GovernanceRejection {
                score: quality_score,
                threshold,
            }
            .into());
        }

        // Redact before anything leaves this process: the embedding is
        // computed over cleaned text only, so PII cannot leak into the
        // vector space through the embedding collaborator.
        let redacted = self.redactor.scrub(text)?;
        let was_redacted = redacted.was_redacted();

        let vector = self.embedder.embed(&redacted.text)?;

        let metadata = LifecycleMetadata {
            owner: owner.to_string(),
            tags,
            quality_score,
            valid_until: valid_until
                .unwrap_or_else(|| Utc::now() + Duration::days(DEFAULT_VALIDITY_DAYS)),
            source_type,
            cleaned_length: redacted.text.len(),
            filename,
        };

        let id = self.store.upsert(&redacted.text, vector, metadata)?;
        info!(%id, quality_score, was_redacted, source = source_type.as_str(), "ingested");

        Ok(IngestReceipt {
            id,
            quality_score,
            was_redacted,
        })
    }
}
