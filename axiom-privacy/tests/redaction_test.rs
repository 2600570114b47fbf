use std::sync::Arc;

use axiom_analysis::HeuristicAnalyzer;
use axiom_core::config::PrivacyConfig;
use axiom_core::traits::{EntityLabel, EntitySpan, ILinguisticAnalyzer, TokenAnnotation};
use axiom_core::AxiomResult;
use axiom_privacy::RedactionEngine;

fn engine() -> RedactionEngine {
    RedactionEngine::new(Arc::new(HeuristicAnalyzer::new()), &PrivacyConfig::default()).unwrap()
}

#[test]
fn email_is_always_redacted() {
    let result = engine()
        .scrub("Please contact support@upm.com for assistance.")
        .unwrap();
    assert!(result.text.contains("<EMAIL>"), "got: {}", result.text);
    assert!(!result.text.contains("support@upm.com"));
    assert!(result.was_redacted());
}

#[test]
fn phone_number_is_always_redacted() {
    let result = engine()
        .scrub("Urgent line is +358401234567 during the maintenance break.")
        .unwrap();
    assert!(result.text.contains("<PHONE>"), "got: {}", result.text);
    assert!(!result.text.contains("358401234567"));
}

#[test]
fn person_redacted_but_allowlisted_org_survives() {
    let result = engine()
        .scrub("Contact John Doe at UPM Biofuels regarding the project.")
        .unwrap();
    assert!(result.text.contains("<PERSON>"), "got: {}", result.text);
    assert!(!result.text.contains("John Doe"));
    // Allow-list precedence: the org term survives even inside a larger
    // detected span.
    assert!(result.text.contains("UPM Biofuels"), "got: {}", result.text);
}

#[test]
fn text_outside_redacted_spans_is_never_shifted() {
    // Scripted analyzer with known span boundaries so the expected output
    // can be reconstructed exactly.
    struct Scripted;
    impl ILinguisticAnalyzer for Scripted {
        fn analyze(&self, _text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
            Ok(Vec::new())
        }
        fn find_entities(&self, _text: &str) -> AxiomResult<Vec<EntitySpan>> {
            // "alpha BRAVO charlie DELTA echo"
            //  0     6     12      20    26
            Ok(vec![
                EntitySpan { start: 6, end: 11, label: EntityLabel::Person },
                EntitySpan { start: 20, end: 25, label: EntityLabel::Location },
            ])
        }
        fn name(&self) -> &str {
            "scripted"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    let engine = RedactionEngine::new(Arc::new(Scripted), &PrivacyConfig::default()).unwrap();
    let result = engine.scrub("alpha BRAVO charlie DELTA echo").unwrap();
    assert_eq!(result.text, "alpha <PERSON> charlie <LOCATION> echo");
    assert_eq!(result.redactions.len(), 2);
}

#[test]
fn overlapping_spans_resolve_deterministically() {
    struct Overlapping;
    impl ILinguisticAnalyzer for Overlapping {
        fn analyze(&self, _text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
            Ok(Vec::new())
        }
        fn find_entities(&self, _text: &str) -> AxiomResult<Vec<EntitySpan>> {
            // The second span is fully contained in the first.
            Ok(vec![
                EntitySpan { start: 0, end: 9, label: EntityLabel::Person },
                EntitySpan { start: 5, end: 9, label: EntityLabel::Location },
            ])
        }
        fn name(&self) -> &str {
            "overlapping"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    let engine = RedactionEngine::new(Arc::new(Overlapping), &PrivacyConfig::default()).unwrap();
    let result = engine.scrub("Jane Wood spoke").unwrap();
    assert_eq!(result.text, "<PERSON> spoke");
}

#[test]
fn misaligned_analyzer_offsets_are_dropped_not_applied() {
    // An analyzer backed by a remote service can return offsets that do not
    // land on char boundaries; those spans must be discarded whole.
    struct Misaligned;
    impl ILinguisticAnalyzer for Misaligned {
        fn analyze(&self, _text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
            Ok(Vec::new())
        }
        fn find_entities(&self, _text: &str) -> AxiomResult<Vec<EntitySpan>> {
            // Starts inside the two-byte 'é' of "café".
            Ok(vec![EntitySpan { start: 4, end: 8, label: EntityLabel::Person }])
        }
        fn name(&self) -> &str {
            "misaligned"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    let engine = RedactionEngine::new(Arc::new(Misaligned), &PrivacyConfig::default()).unwrap();
    let result = engine.scrub("caf\u{e9} meeting notes").unwrap();
    assert_eq!(result.text, "caf\u{e9} meeting notes");
    assert!(!result.was_redacted());
}

#[test]
fn audit_trail_lists_only_applied_redactions() {
    // A span targeting the body of an existing placeholder is skipped at
    // application time and must not be reported as a redaction.
    struct PlaceholderBody;
    impl ILinguisticAnalyzer for PlaceholderBody {
        fn analyze(&self, _text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
            Ok(Vec::new())
        }
        fn find_entities(&self, text: &str) -> AxiomResult<Vec<EntitySpan>> {
            // "met <PERSON> today": the body between '<' and '>'.
            let start = text.find("PERSON").unwrap_or(0);
            Ok(vec![EntitySpan {
                start,
                end: start + "PERSON".len(),
                label: EntityLabel::Organization,
            }])
        }
        fn name(&self) -> &str {
            "placeholder-body"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    let engine =
        RedactionEngine::new(Arc::new(PlaceholderBody), &PrivacyConfig::default()).unwrap();
    let result = engine.scrub("met <PERSON> today").unwrap();
    assert_eq!(result.text, "met <PERSON> today");
    assert!(result.redactions.is_empty());
    assert!(!result.was_redacted());
}

#[test]
fn scrub_is_idempotent() {
    let e = engine();
    let once = e
        .scrub("Contact John Doe at john.doe@mill.fi or +358401234567 today.")
        .unwrap();
    let twice = e.scrub(&once.text).unwrap();
    assert_eq!(once.text, twice.text);
}

#[test]
fn unavailable_analyzer_fails_construction() {
    struct Offline;
    impl ILinguisticAnalyzer for Offline {
        fn analyze(&self, _text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
            Ok(Vec::new())
        }
        fn find_entities(&self, _text: &str) -> AxiomResult<Vec<EntitySpan>> {
            Ok(Vec::new())
        }
        fn name(&self) -> &str {
            "offline"
        }
        fn is_available(&self) -> bool {
            false
        }
    }

    let err = RedactionEngine::new(Arc::new(Offline), &PrivacyConfig::default()).unwrap_err();
    assert!(matches!(err, axiom_core::AxiomError::Analysis(_)));
}

#[test]
fn empty_input_passes_through() {
    let result = engine().scrub("").unwrap();
    assert_eq!(result.text, "");
    assert!(!result.was_redacted());
}

#[test]
fn redaction_audit_records_categories() {
    let result = engine()
        .scrub("Mail jane@mill.fi about Jane Wood before Friday.")
        .unwrap();
    let categories: Vec<&str> = result.redactions.iter().map(|r| r.category.as_str()).collect();
    assert!(categories.iter().any(|c| c.starts_with("structural:email")));
    assert!(categories.iter().any(|c| c.starts_with("entity:")));
}
