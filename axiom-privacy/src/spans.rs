//! Span arithmetic for text rewriting.
//!
//! A redaction is an immutable list of half-open `[start, end)` byte
//! intervals with replacement text. Applying them in descending start order
//! is mandatory: replacement lengths differ from the original, so rewriting
//! a lower offset first would invalidate every span after it.

use serde::{Deserialize, Serialize};

/// One pending replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementSpan {
    pub start: usize,
    pub end: usize,
    pub placeholder: String,
    pub category: String,
}

/// Sort spans by start offset descending and drop overlaps.
///
/// Overlap resolution is deterministic: keep the longer span, and on equal
/// length the one with the lower start offset.
pub fn sort_and_dedup(spans: &mut Vec<ReplacementSpan>) {
    spans.sort_by(|a, b| b.start.cmp(&a.start));

    let mut i = 0;
    while i + 1 < spans.len() {
        // Sorted descending, so spans[i + 1].start <= spans[i].start.
        let overlaps = spans[i + 1].end > spans[i].start;
        if overlaps {
            let cur_len = spans[i].end - spans[i].start;
            let next_len = spans[i + 1].end - spans[i + 1].start;
            if next_len >= cur_len {
                spans.remove(i);
            } else {
                spans.remove(i + 1);
            }
        } else {
            i += 1;
        }
    }
}

/// Whether `[start, end)` is a valid, char-aligned slice of `text`.
pub fn is_aligned(text: &str, start: usize, end: usize) -> bool {
    start <= end
        && end <= text.len()
        && text.is_char_boundary(start)
        && text.is_char_boundary(end)
}

/// Whether the span sits between an existing `<`/`>` pair, i.e. is the body
/// of an already-applied placeholder. Re-scrubbing must not touch those.
/// Misaligned offsets are treated as not-inside, never sliced.
pub fn inside_placeholder(text: &str, start: usize, end: usize) -> bool {
    if !is_aligned(text, start, end) {
        return false;
    }
    text[..start].ends_with('<') && text[end..].starts_with('>')
}

/// Apply replacements to `text`. `spans` must already be sorted descending
/// by start and overlap-free. Returns the rewritten text and the spans that
/// were actually applied; spans off char boundaries, outside the text, or
/// inside an existing placeholder are skipped, not applied.
pub fn apply(text: &str, spans: &[ReplacementSpan]) -> (String, Vec<ReplacementSpan>) {
    let mut result = text.to_string();
    let mut applied = Vec::with_capacity(spans.len());
    for span in spans {
        if !is_aligned(&result, span.start, span.end) {
            continue;
        }
        if inside_placeholder(&result, span.start, span.end) {
            continue;
        }
        result.replace_range(span.start..span.end, &span.placeholder);
        applied.push(span.clone());
    }
    (result, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, placeholder: &str) -> ReplacementSpan {
        ReplacementSpan {
            start,
            end,
            placeholder: placeholder.to_string(),
            category: "test".to_string(),
        }
    }

    #[test]
    fn descending_application_preserves_other_text() {
        let text = "aa BBB cc DDD ee";
        let mut spans = vec![span(3, 6, "<X>"), span(10, 13, "<Y>")];
        sort_and_dedup(&mut spans);
        let (result, applied) = apply(text, &spans);
        assert_eq!(result, "aa <X> cc <Y> ee");
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn contained_span_is_dropped() {
        let mut spans = vec![span(0, 10, "<BIG>"), span(2, 5, "<SMALL>")];
        sort_and_dedup(&mut spans);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].placeholder, "<BIG>");
    }

    #[test]
    fn equal_length_overlap_keeps_lower_start() {
        let mut spans = vec![span(0, 4, "<A>"), span(2, 6, "<B>")];
        sort_and_dedup(&mut spans);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
    }

    #[test]
    fn placeholder_body_is_not_rewritten() {
        let text = "met <PERSON> today";
        let spans = vec![span(5, 11, "<ORGANIZATION>")];
        let (result, applied) = apply(text, &spans);
        assert_eq!(result, text);
        assert!(applied.is_empty());
    }

    #[test]
    fn misaligned_span_is_skipped_not_panicking() {
        // 'é' is two bytes; offset 4 falls inside it.
        let text = "caf\u{e9} bar";
        let spans = vec![span(4, 6, "<X>")];
        let (result, applied) = apply(text, &spans);
        assert_eq!(result, text);
        assert!(applied.is_empty());
        assert!(!inside_placeholder(text, 4, 6));
    }
}
