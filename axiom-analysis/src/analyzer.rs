//! Heuristic implementation of the linguistic-analysis collaborator.
//!
//! Rule-based POS tagging and capitalized-run entity detection. Not as
//! accurate as a statistical model, but deterministic and dependency-free,
//! so it works in air-gapped deployments and tests. Production deployments
//! can bind a real NLP service behind the same trait.

use axiom_core::errors::AxiomResult;
use axiom_core::traits::{EntityLabel, EntitySpan, ILinguisticAnalyzer, PosTag, TokenAnnotation};

use crate::stopwords::is_stopword;
use crate::token::{tokenize, RawToken, TokenKind};

/// Tokens that mark the preceding run as an organization name.
static ORG_MARKERS: &[&str] = &[
    "Inc", "Ltd", "Corp", "Corporation", "LLC", "GmbH", "Oy", "Oyj", "AB", "Biofuels", "Biofore",
    "Group", "Labs", "Technologies", "Systems", "Industries", "University", "Institute",
];

/// Well-known place names and geographic suffixes.
static LOC_MARKERS: &[&str] = &[
    "Finland", "Helsinki", "Germany", "Berlin", "France", "Paris", "London", "Madrid", "Europe",
    "Asia", "America", "Africa", "City", "Island", "River", "Valley", "Bay",
];

/// Honorifics that mark the following run as a person.
static HONORIFICS: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Prof"];

fn ends_sentence(text: &str) -> bool {
    matches!(text, "." | "!" | "?")
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
        && word.chars().any(|c| c.is_alphabetic())
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|c| !c.is_alphabetic())
}

fn is_acronym(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|c| c.is_uppercase() || c.is_numeric())
}

/// Suffix-based POS guess for a lowercased word.
fn tag_by_suffix(lower: &str) -> PosTag {
    const VERB_SUFFIXES: &[&str] = &["ing", "ize", "ise", "ify", "ed"];
    const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ic", "less", "ical"];
    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism",
    ];

    if lower.ends_with("ly") {
        // Adverbs are not content-bearing for density purposes.
        return PosTag::Other;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Noun;
    }
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Verb;
    }
    // Remaining open-class words default to noun, the most common class.
    PosTag::Noun
}

/// Deterministic, rule-based linguistic analyzer.
#[derive(Debug, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Whether the token at `idx` starts a sentence: nothing before it, or
    /// the previous non-space token is sentence-final punctuation.
    fn sentence_initial(tokens: &[RawToken], idx: usize, text: &str) -> bool {
        tokens[..idx]
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Space)
            .map_or(true, |t| t.kind == TokenKind::Punct && ends_sentence(t.text(text)))
    }

    fn classify_run(words: &[&str], preceded_by_honorific: bool) -> EntityLabel {
        fn clean(w: &str) -> &str {
            w.trim_end_matches('.')
        }
        if words.iter().any(|w| ORG_MARKERS.contains(&clean(w))) {
            return EntityLabel::Organization;
        }
        if words.iter().any(|w| LOC_MARKERS.contains(&clean(w))) {
            return EntityLabel::Location;
        }
        if preceded_by_honorific {
            return EntityLabel::Person;
        }
        if words.len() == 1 && is_acronym(words[0]) {
            return EntityLabel::Organization;
        }
        EntityLabel::Person
    }
}

impl ILinguisticAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str) -> AxiomResult<Vec<TokenAnnotation>> {
        let tokens = tokenize(text);
        let mut out = Vec::with_capacity(tokens.len());

        for (idx, tok) in tokens.iter().enumerate() {
            let raw = tok.text(text);
            let annotation = match tok.kind {
                TokenKind::Space => TokenAnnotation {
                    text: raw.to_string(),
                    pos: PosTag::Other,
                    is_stopword: false,
                    is_punct: false,
                    is_space: true,
                },
                TokenKind::Punct => TokenAnnotation {
                    text: raw.to_string(),
                    pos: PosTag::Other,
                    is_stopword: false,
                    is_punct: true,
                    is_space: false,
                },
                TokenKind::Word => {
                    let stop = is_stopword(raw);
                    let pos = if is_numeric(raw) {
                        PosTag::Other
                    } else if stop {
                        PosTag::Other
                    } else if is_capitalized(raw)
                        && !Self::sentence_initial(&tokens, idx, text)
                    {
                        PosTag::ProperNoun
                    } else {
                        tag_by_suffix(&raw.to_lowercase())
                    };
                    TokenAnnotation {
                        text: raw.to_string(),
                        pos,
                        is_stopword: stop,
                        is_punct: false,
                        is_space: false,
                    }
                }
            };
            out.push(annotation);
        }

        Ok(out)
    }

    fn find_entities(&self, text: &str) -> AxiomResult<Vec<EntitySpan>> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();
        let mut idx = 0;

        while idx < tokens.len() {
            let tok = &tokens[idx];
            if tok.kind != TokenKind::Word || !is_capitalized(tok.text(text)) {
                idx += 1;
                continue;
            }

            // Extend the run across consecutive capitalized words separated
            // only by single spaces (which the tokenizer does not emit).
            let mut run_start_idx = idx;
            let mut run_end_idx = idx;
            while run_end_idx + 1 < tokens.len() {
                let next = &tokens[run_end_idx + 1];
                if next.kind == TokenKind::Word && is_capitalized(next.text(text)) {
                    run_end_idx += 1;
                } else {
                    break;
                }
            }

            // A sentence-initial word followed by more capitalized words is
            // usually ordinary capitalization ("Contact John Doe"), not part
            // of the name. Acronyms and org/location markers stay: they are
            // capitalized in any position.
            if run_end_idx > run_start_idx
                && Self::sentence_initial(&tokens, run_start_idx, text)
            {
                let first = tokens[run_start_idx].text(text);
                if !is_acronym(first)
                    && !ORG_MARKERS.contains(&first)
                    && !LOC_MARKERS.contains(&first)
                    && !HONORIFICS.contains(&first.trim_end_matches('.'))
                {
                    run_start_idx += 1;
                }
            }

            let words: Vec<&str> = tokens[run_start_idx..=run_end_idx]
                .iter()
                .map(|t| t.text(text))
                .collect();

            let single = words.len() == 1;
            let all_stop = words.iter().all(|w| is_stopword(w));
            let initial = Self::sentence_initial(&tokens, run_start_idx, text);
            let honorific = run_start_idx > 0
                && tokens[..run_start_idx]
                    .iter()
                    .rev()
                    .find(|t| t.kind == TokenKind::Word)
                    .is_some_and(|t| HONORIFICS.contains(&t.text(text).trim_end_matches('.')));

            // Single sentence-initial words are usually just capitalization,
            // not names. Stopword-only runs never name anything, and an
            // honorific is a marker for the name that follows, not a name.
            let is_honorific_itself =
                single && HONORIFICS.contains(&words[0].trim_end_matches('.'));
            let keep = !all_stop && !is_honorific_itself && !(single && initial && !honorific);

            if keep {
                spans.push(EntitySpan {
                    start: tokens[run_start_idx].start,
                    end: tokens[run_end_idx].end,
                    label: Self::classify_run(&words, honorific),
                });
            }

            idx = run_end_idx + 1;
        }

        Ok(spans)
    }

    fn name(&self) -> &str {
        "heuristic"
    }

    fn is_available(&self) -> bool {
        true
    }
}
