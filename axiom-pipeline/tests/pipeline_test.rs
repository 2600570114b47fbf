//! End-to-end pipeline tests over the in-memory index: text goes in one
//! side, governed, redacted, time-filtered results come out the other.

use std::sync::Arc;

use chrono::{Duration, Utc};

use axiom_analysis::HeuristicAnalyzer;
use axiom_core::config::{PrivacyConfig, ScoringConfig};
use axiom_core::constants::NO_MATCH_ANSWER;
use axiom_core::errors::{AxiomError, ValidationError};
use axiom_core::traits::IVectorIndex;
use axiom_pipeline::{
    GatePolicy, IngestRequest, IngestionPipeline, PlainTextExtractor, RetrievalPipeline,
};
use axiom_privacy::RedactionEngine;
use axiom_scoring::DensityScorer;
use axiom_store::LifecycleVectorStore;
use test_fixtures::{texts, FailingGenerator, HashedEmbedder, MemoryVectorIndex, ScriptedGenerator};

const DIMS: usize = 64;

struct Harness {
    ingestion: IngestionPipeline,
    retrieval: RetrievalPipeline,
    index: Arc<MemoryVectorIndex>,
}

fn harness() -> Harness {
    let analyzer: Arc<dyn axiom_core::traits::ILinguisticAnalyzer> =
        Arc::new(HeuristicAnalyzer::new());
    let scorer = Arc::new(DensityScorer::new(analyzer.clone()));
    let redactor = Arc::new(
        RedactionEngine::new(analyzer, &PrivacyConfig::default())
            .unwrap(),
    );
    let embedder: Arc<dyn axiom_core::traits::IEmbeddingProvider> =
        Arc::new(HashedEmbedder::new(DIMS));
    let index = Arc::new(MemoryVectorIndex::new());
    let store = Arc::new(LifecycleVectorStore::new(
        index.clone() as Arc<dyn IVectorIndex>,
        DIMS,
    ));
    store.ensure_collection().unwrap();

    let ingestion = IngestionPipeline::new(
        scorer,
        redactor,
        embedder.clone(),
        store.clone(),
        GatePolicy::from_config(&ScoringConfig::default()),
    )
    .with_extractor(Arc::new(PlainTextExtractor));
    let retrieval = RetrievalPipeline::new(embedder, store);

    Harness {
        ingestion,
        retrieval,
        index,
    }
}

fn request(text: &str) -> IngestRequest {
    IngestRequest {
        text: text.to_string(),
        owner: "owner@example.com".to_string(),
        tags: vec!["test".to_string()],
        valid_until: None,
    }
}

#[test]
fn dense_text_is_accepted_and_searchable() {
    let h = harness();

    let receipt = h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();
    assert!(!receipt.id.is_empty());
    assert!(receipt.quality_score > 0.25);

    let hits = h.retrieval.search("forest bioindustry", 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, receipt.id);
    assert_eq!(hits[0].metadata.owner, "owner@example.com");
}

#[test]
fn sparse_text_is_rejected_with_score_and_threshold() {
    let h = harness();

    let err = h.ingestion.ingest(request(texts::LOW_DENSITY)).unwrap_err();
    match err {
        AxiomError::Governance(rejection) => {
            assert!(rejection.score < rejection.threshold);
            assert_eq!(rejection.threshold, 0.25);
        }
        other => panic!("expected governance rejection, got {other:?}"),
    }
    // Nothing was written.
    assert!(h.index.is_empty());
}

#[test]
fn missing_owner_is_rejected_before_scoring() {
    let h = harness();

    let mut req = request(texts::HIGH_DENSITY);
    req.owner = "   ".to_string();
    let err = h.ingestion.ingest(req).unwrap_err();
    assert!(matches!(
        err,
        AxiomError::Validation(ValidationError::MissingOwner)
    ));
    assert!(h.index.is_empty());
}

#[test]
fn empty_text_is_rejected_before_scoring() {
    let h = harness();

    let err = h.ingestion.ingest(request("  \n\t ")).unwrap_err();
    assert!(matches!(
        err,
        AxiomError::Validation(ValidationError::EmptyText)
    ));
    assert!(h.index.is_empty());
}

#[test]
fn default_expiry_is_one_year_out() {
    let h = harness();

    let before = Utc::now() + Duration::days(365) - Duration::seconds(5);
    h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();
    let after = Utc::now() + Duration::days(365) + Duration::seconds(5);

    let hits = h.retrieval.search(texts::HIGH_DENSITY, 1).unwrap();
    let valid_until = hits[0].metadata.valid_until;
    assert!(valid_until > before && valid_until < after);
}

#[test]
fn expired_records_never_surface() {
    let h = harness();

    let mut req = request(texts::HIGH_DENSITY);
    req.valid_until = Some(Utc::now() - Duration::seconds(1));
    h.ingestion.ingest(req).unwrap();

    // The record exists in the index but is invisible to search.
    assert_eq!(h.index.len(), 1);
    assert!(h.retrieval.search(texts::HIGH_DENSITY, 5).unwrap().is_empty());
}

#[test]
fn pii_is_redacted_before_storage() {
    let h = harness();

    let receipt = h
        .ingestion
        .ingest(request(
            "Sustainable forestry production reached record output levels. \
             Contact address procurement@example.com handles renewable diesel \
             supply contracts and biochemical feedstock logistics worldwide.",
        ))
        .unwrap();
    assert!(receipt.was_redacted);

    let hits = h.retrieval.search("renewable diesel contracts", 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].text.contains("<EMAIL>"));
    assert!(!hits[0].text.contains("procurement@example.com"));
}

#[test]
fn retried_ingestion_creates_distinct_records() {
    let h = harness();

    let first = h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();
    let second = h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(h.index.len(), 2);
}

#[test]
fn file_ingestion_records_filename_and_source_type() {
    let h = harness();

    let receipt = h
        .ingestion
        .ingest_file(
            texts::HIGH_DENSITY.as_bytes(),
            "owner@example.com",
            vec![],
            Some("strategy.txt".to_string()),
        )
        .unwrap();

    let hits = h.retrieval.search("forest bioindustry", 1).unwrap();
    assert_eq!(hits[0].id, receipt.id);
    assert_eq!(hits[0].metadata.filename.as_deref(), Some("strategy.txt"));
    assert_eq!(hits[0].source_label(), "strategy.txt");
}

#[test]
fn file_ingestion_uses_the_stricter_threshold() {
    let h = harness();

    // Prose that clears the raw-text bar but not the extracted-file bar.
    let borderline = "It is generally understood that there are many things \
        which can be considered when one is looking at the overall matter of \
        how these products might be used in various common situations, and \
        that is just as it should be.";
    let score = {
        let analyzer: Arc<dyn axiom_core::traits::ILinguisticAnalyzer> =
            Arc::new(HeuristicAnalyzer::new());
        DensityScorer::new(analyzer).calculate_score(borderline).unwrap()
    };
    assert!(score >= 0.25 && score < 0.40, "fixture drifted: {score}");

    h.ingestion
        .ingest(IngestRequest {
            text: borderline.to_string(),
            owner: "owner@example.com".to_string(),
            tags: vec![],
            valid_until: None,
        })
        .unwrap();

    let err = h
        .ingestion
        .ingest_file(borderline.as_bytes(), "owner@example.com", vec![], None)
        .unwrap_err();
    match err {
        AxiomError::Governance(rejection) => assert_eq!(rejection.threshold, 0.40),
        other => panic!("expected governance rejection, got {other:?}"),
    }
}

#[test]
fn empty_file_extraction_is_rejected() {
    let h = harness();

    let err = h
        .ingestion
        .ingest_file(b"   \n\t  ", "owner@example.com", vec![], None)
        .unwrap_err();
    assert!(matches!(
        err,
        AxiomError::Validation(ValidationError::EmptyExtraction)
    ));
}

#[test]
fn chat_short_circuits_on_no_match() {
    let h = harness();
    let generator = Arc::new(ScriptedGenerator::new("should never be used"));
    let retrieval = h.retrieval.with_generator(generator.clone());

    let response = retrieval.chat("anything at all", 5).unwrap();
    assert_eq!(response.answer, NO_MATCH_ANSWER);
    assert!(response.context.is_empty());
    assert_eq!(generator.calls(), 0);
}

#[test]
fn chat_uses_generator_when_context_exists() {
    let h = harness();
    h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();

    let generator = Arc::new(ScriptedGenerator::new("Grounded answer."));
    let retrieval = h.retrieval.with_generator(generator.clone());

    let response = retrieval.chat("forest bioindustry future", 5).unwrap();
    assert_eq!(response.answer, "Grounded answer.");
    assert_eq!(response.context.len(), 1);
    assert_eq!(generator.calls(), 1);
}

#[test]
fn chat_degrades_on_generator_failure() {
    let h = harness();
    h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();

    let retrieval = h.retrieval.with_generator(Arc::new(FailingGenerator));
    let response = retrieval.chat("forest bioindustry future", 5).unwrap();

    // Context survives even though no answer could be synthesized.
    assert_eq!(response.context.len(), 1);
    assert_ne!(response.answer, NO_MATCH_ANSWER);
    assert!(response.answer.contains("unavailable"));
}

#[test]
fn chat_without_generator_returns_degraded_answer() {
    let h = harness();
    h.ingestion.ingest(request(texts::HIGH_DENSITY)).unwrap();

    let response = h.retrieval.chat("forest bioindustry future", 5).unwrap();
    assert_eq!(response.context.len(), 1);
    assert!(response.answer.contains("unavailable"));
}
