/// Linguistic-analysis collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Raised at construction time when a component needs the analyzer and
    /// it is not available. Redaction must fail fast rather than silently
    /// skip entity detection.
    #[error("linguistic analyzer '{analyzer}' is unavailable")]
    AnalyzerUnavailable { analyzer: String },

    #[error("analysis failed: {reason}")]
    AnalysisFailed { reason: String },
}
