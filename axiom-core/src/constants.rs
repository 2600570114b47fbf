//! Fixed values that are part of the system contract, not tunables.
//! Tunable defaults live in `config::defaults`.

/// Texts shorter than this (after trimming) score 0.0 unconditionally.
pub const MIN_SCOREABLE_LENGTH: usize = 50;

/// Records ingested without an explicit expiry become invalid after this
/// many days. There is no "forever valid" state.
pub const DEFAULT_VALIDITY_DAYS: i64 = 365;

/// Quality scores are rounded to this many decimal places.
pub const SCORE_DECIMAL_PLACES: u32 = 4;

/// Placeholder substituted for matched email addresses.
pub const EMAIL_PLACEHOLDER: &str = "<EMAIL>";

/// Placeholder substituted for matched phone numbers.
pub const PHONE_PLACEHOLDER: &str = "<PHONE>";

/// Answer returned by `chat` when retrieval finds nothing; the generation
/// provider is not invoked in that case.
pub const NO_MATCH_ANSWER: &str =
    "I couldn't find any internal documents matching your query.";
