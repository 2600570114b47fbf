use serde::{Deserialize, Serialize};

use crate::errors::AxiomResult;

/// Coarse part-of-speech classes. Only the content-bearing classes matter
/// to the density scorer; everything else is grouped under `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    ProperNoun,
    Other,
}

/// One token as classified by the linguistic analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAnnotation {
    pub text: String,
    pub pos: PosTag,
    pub is_stopword: bool,
    pub is_punct: bool,
    pub is_space: bool,
}

impl TokenAnnotation {
    /// A token that carries information: not a stopword, not punctuation,
    /// not whitespace, and tagged as a content-bearing part of speech.
    pub fn is_content(&self) -> bool {
        !self.is_stopword
            && !self.is_punct
            && !self.is_space
            && matches!(
                self.pos,
                PosTag::Noun | PosTag::Verb | PosTag::Adjective | PosTag::ProperNoun
            )
    }
}

/// Semantic label of a detected named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
}

impl EntityLabel {
    /// Placeholder substituted for a redacted span with this label.
    pub fn placeholder(&self) -> &'static str {
        match self {
            EntityLabel::Person => "<PERSON>",
            EntityLabel::Organization => "<ORGANIZATION>",
            EntityLabel::Location => "<LOCATION>",
        }
    }
}

/// A detected entity as a half-open `[start, end)` byte interval into the
/// analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

/// Linguistic-analysis collaborator: tokenization/tagging for the density
/// scorer and named-entity detection for the redactor.
pub trait ILinguisticAnalyzer: Send + Sync {
    /// Decompose text into classified tokens, including stopwords,
    /// punctuation, and whitespace runs.
    fn analyze(&self, text: &str) -> AxiomResult<Vec<TokenAnnotation>>;

    /// Detect named entities, returning byte-offset spans into `text`.
    fn find_entities(&self, text: &str) -> AxiomResult<Vec<EntitySpan>>;

    /// Human-readable analyzer name.
    fn name(&self) -> &str;

    /// Whether this analyzer is usable. Components that depend on entity
    /// detection check this at construction time and fail fast.
    fn is_available(&self) -> bool;
}
