//! Structural PII patterns.
//!
//! Emails and phone numbers are always sensitive: the allow-list does not
//! apply to this pass. Patterns compile once; a pattern that fails to
//! compile degrades to no-match and is reported by
//! [`pattern_health`](crate::engine::RedactionEngine::pattern_health)
//! instead of panicking at startup.

use std::sync::LazyLock;

use regex::Regex;

use axiom_core::constants::{EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER};

use crate::spans::ReplacementSpan;

/// A compiled structural detection pattern.
pub struct StructuralPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub placeholder: &'static str,
}

macro_rules! structural_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

structural_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// International digit sequences of plausible length. Deliberately does not
// match the digits inside an already-applied placeholder (there are none).
structural_pattern!(RE_PHONE, r"\+?\b[0-9]{10,15}\b");

/// All structural patterns in detection order.
pub fn all_patterns() -> Vec<StructuralPattern> {
    vec![
        StructuralPattern {
            name: "email",
            regex: &RE_EMAIL,
            placeholder: EMAIL_PLACEHOLDER,
        },
        StructuralPattern {
            name: "phone",
            regex: &RE_PHONE,
            placeholder: PHONE_PLACEHOLDER,
        },
    ]
}

/// Run every structural pattern over `text`, returning replacement spans
/// sorted by start offset descending, overlaps removed.
pub fn scan(text: &str) -> Vec<ReplacementSpan> {
    let mut spans = Vec::new();
    for pat in all_patterns() {
        let Some(re) = pat.regex.as_ref() else { continue };
        for m in re.find_iter(text) {
            spans.push(ReplacementSpan {
                start: m.start(),
                end: m.end(),
                placeholder: pat.placeholder.to_string(),
                category: format!("structural:{}", pat.name),
            });
        }
    }
    crate::spans::sort_and_dedup(&mut spans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for pat in all_patterns() {
            assert!(pat.regex.is_some(), "pattern '{}' failed to compile", pat.name);
        }
    }

    #[test]
    fn email_matched() {
        let spans = scan("reach me at jane.doe@example.org please");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].placeholder, "<EMAIL>");
    }

    #[test]
    fn international_phone_matched() {
        let spans = scan("call +358401234567 today");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].placeholder, "<PHONE>");
    }

    #[test]
    fn short_digit_runs_ignored() {
        assert!(scan("order 1234 shipped in 2024").is_empty());
    }

    #[test]
    fn placeholders_do_not_rematch() {
        assert!(scan("wrote to <EMAIL> and <PHONE> already").is_empty());
    }
}
