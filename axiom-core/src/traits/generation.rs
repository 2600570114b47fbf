use crate::errors::AxiomResult;

/// Answer-generation collaborator. Invoked with instructions to answer only
/// from the supplied context and to state uncertainty when the answer is not
/// present. Failures must be catchable; the retrieval path degrades instead
/// of propagating them.
pub trait IGenerationProvider: Send + Sync {
    fn generate(
        &self,
        system_prompt: &str,
        context: &str,
        question: &str,
    ) -> AxiomResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
