//! File extraction collaborators.

use axiom_core::errors::{AxiomResult, ValidationError};
use axiom_core::traits::IFileExtractor;

/// Extracts text from plain UTF-8 uploads (`.txt`, `.md`, source files).
/// Binary formats need their own adapter; bytes that do not decode as UTF-8
/// are rejected rather than lossily converted, since silent mangling would
/// corrupt the text before it is scored.
pub struct PlainTextExtractor;

impl IFileExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> AxiomResult<String> {
        let text = std::str::from_utf8(bytes).map_err(|_| ValidationError::UnsupportedFormat {
            format: "non-UTF-8 binary".to_string(),
        })?;
        Ok(text.to_string())
    }
}
