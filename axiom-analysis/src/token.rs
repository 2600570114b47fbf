//! Byte-span tokenizer shared by tagging and entity detection.

/// Kind of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct,
    /// Unusual whitespace only (runs longer than one space, tabs, newlines).
    /// Single inter-word spaces are not emitted as tokens.
    Space,
}

/// A token with its half-open byte span into the source text.
#[derive(Debug, Clone)]
pub struct RawToken {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl RawToken {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-' || c == '_'
}

/// Split text into word, punctuation, and unusual-whitespace tokens.
/// Hyphenated and apostrophe compounds stay single words.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            let mut end = start;
            let mut count = 0usize;
            let mut unusual = false;
            while let Some(&(i, w)) = chars.peek() {
                if !w.is_whitespace() {
                    break;
                }
                unusual |= w != ' ';
                count += 1;
                end = i + w.len_utf8();
                chars.next();
            }
            // A single plain space separates words and is not a token.
            if count > 1 || unusual {
                tokens.push(RawToken {
                    start,
                    end,
                    kind: TokenKind::Space,
                });
            }
        } else if is_word_char(c) {
            let mut end = start;
            while let Some(&(i, w)) = chars.peek() {
                if !is_word_char(w) {
                    break;
                }
                end = i + w.len_utf8();
                chars.next();
            }
            tokens.push(RawToken {
                start,
                end,
                kind: TokenKind::Word,
            });
        } else {
            chars.next();
            tokens.push(RawToken {
                start,
                end: start + c.len_utf8(),
                kind: TokenKind::Punct,
            });
        }
    }

    tokens
}
