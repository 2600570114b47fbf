//! The redaction engine: structural pass, then entity pass.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use axiom_core::config::PrivacyConfig;
use axiom_core::errors::{AnalysisError, AxiomResult};
use axiom_core::traits::ILinguisticAnalyzer;

use crate::allowlist::AllowList;
use crate::patterns;
use crate::spans::{self, ReplacementSpan};

/// One redaction applied to a text, for auditing. Offsets are relative to
/// the input of the pass that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redaction {
    pub category: String,
    pub placeholder: String,
    pub start: usize,
    pub end: usize,
}

/// Result of scrubbing: the cleaned text plus what was removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedText {
    pub text: String,
    pub redactions: Vec<Redaction>,
}

impl RedactedText {
    pub fn was_redacted(&self) -> bool {
        !self.redactions.is_empty()
    }
}

/// A structural pattern that failed to compile and silently degrades to
/// no-match. Surfaced so operators notice instead of assuming coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternFailure {
    pub pattern: String,
}

/// Sanitizes text before it enters the storage layer.
///
/// Two passes, in order: regex redaction of structural PII (emails, phone
/// numbers — unconditional), then entity redaction (person/organization/
/// location) honoring the allow-list. Holds no per-request state; safe to
/// share across concurrent requests.
pub struct RedactionEngine {
    analyzer: Arc<dyn ILinguisticAnalyzer>,
    allowlist: AllowList,
}

impl RedactionEngine {
    /// Build the engine. Fails fast when the analyzer is unavailable:
    /// silently skipping entity redaction would leak names into the index.
    pub fn new(
        analyzer: Arc<dyn ILinguisticAnalyzer>,
        config: &PrivacyConfig,
    ) -> AxiomResult<Self> {
        if !analyzer.is_available() {
            return Err(AnalysisError::AnalyzerUnavailable {
                analyzer: analyzer.name().to_string(),
            }
            .into());
        }
        Ok(Self {
            allowlist: AllowList::from_config(config),
            analyzer,
        })
    }

    /// Redact PII from `text`. Idempotent: re-scrubbing already-redacted
    /// text leaves placeholders intact.
    pub fn scrub(&self, text: &str) -> AxiomResult<RedactedText> {
        if text.is_empty() {
            return Ok(RedactedText {
                text: String::new(),
                redactions: Vec::new(),
            });
        }

        let mut redactions = Vec::new();

        // Pass 1: structural. Fastest first, and unconditional.
        let structural = patterns::scan(text);
        let after_structural = if structural.is_empty() {
            text.to_string()
        } else {
            let (cleaned, applied) = spans::apply(text, &structural);
            record(&mut redactions, &applied);
            cleaned
        };

        // Pass 2: entities, over the already-scrubbed text so offsets refer
        // to what actually gets rewritten.
        let mut entity_spans: Vec<ReplacementSpan> = self
            .analyzer
            .find_entities(&after_structural)?
            .into_iter()
            .filter(|span| {
                // Collaborator offsets are untrusted; a span off a char
                // boundary is dropped, never sliced.
                if !spans::is_aligned(&after_structural, span.start, span.end) {
                    debug!(start = span.start, end = span.end, "misaligned entity span dropped");
                    return false;
                }
                if spans::inside_placeholder(&after_structural, span.start, span.end) {
                    return false;
                }
                let span_text = &after_structural[span.start..span.end];
                if self.allowlist.shields(span_text) {
                    trace!(span = span_text, "allow-listed span kept");
                    false
                } else {
                    true
                }
            })
            .map(|span| ReplacementSpan {
                start: span.start,
                end: span.end,
                placeholder: span.label.placeholder().to_string(),
                category: format!("entity:{:?}", span.label).to_lowercase(),
            })
            .collect();
        spans::sort_and_dedup(&mut entity_spans);

        let (cleaned, applied) = spans::apply(&after_structural, &entity_spans);
        record(&mut redactions, &applied);

        debug!(
            redactions = redactions.len(),
            changed = cleaned != text,
            "scrub complete"
        );

        Ok(RedactedText {
            text: cleaned,
            redactions,
        })
    }

    /// Structural patterns that failed to compile at init time.
    pub fn pattern_health(&self) -> Vec<PatternFailure> {
        patterns::all_patterns()
            .into_iter()
            .filter(|p| p.regex.is_none())
            .map(|p| PatternFailure {
                pattern: p.name.to_string(),
            })
            .collect()
    }
}

impl fmt::Debug for RedactionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionEngine")
            .field("analyzer", &self.analyzer.name())
            .field("allowlist", &self.allowlist)
            .finish()
    }
}

fn record(redactions: &mut Vec<Redaction>, applied: &[ReplacementSpan]) {
    for span in applied {
        redactions.push(Redaction {
            category: span.category.clone(),
            placeholder: span.placeholder.clone(),
            start: span.start,
            end: span.end,
        });
    }
}
