/// Answer-generation collaborator errors. Callers on the retrieval path
/// catch these and degrade instead of failing the whole request.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("generation provider returned an empty answer")]
    EmptyAnswer,

    #[error("no generation provider configured")]
    NotConfigured,
}
