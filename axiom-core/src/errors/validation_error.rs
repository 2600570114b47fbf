/// Malformed or disallowed input. Surfaced immediately, no side effects.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("owner is required and must be non-empty")]
    MissingOwner,

    #[error("text is empty")]
    EmptyText,

    #[error("file extraction produced no text")]
    EmptyExtraction,

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unsupported source format: {format}")]
    UnsupportedFormat { format: String },
}
