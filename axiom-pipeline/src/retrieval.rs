//! The retrieval pipeline: embed the question, search the store, and
//! optionally synthesize an answer grounded in what was found.

use std::sync::Arc;

use tracing::{debug, warn};

use axiom_core::constants::NO_MATCH_ANSWER;
use axiom_core::errors::AxiomResult;
use axiom_core::models::{ChatResponse, SearchHit};
use axiom_core::traits::{IEmbeddingProvider, IGenerationProvider};
use axiom_store::LifecycleVectorStore;

const SYSTEM_PROMPT: &str = "You are an internal knowledge assistant. Answer \
    using only the provided context documents. If the context does not \
    contain the answer, say that you do not know. Do not invent facts.";

/// Answers questions over the governed store. Generation is optional: with
/// no provider configured, `chat` still returns the retrieved context with a
/// degraded answer, so retrieval never depends on an external service.
pub struct RetrievalPipeline {
    embedder: Arc<dyn IEmbeddingProvider>,
    store: Arc<LifecycleVectorStore>,
    generator: Option<Arc<dyn IGenerationProvider>>,
}

impl RetrievalPipeline {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<LifecycleVectorStore>,
    ) -> Self {
        Self {
            embedder,
            store,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn IGenerationProvider>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Plain similarity search over currently-valid records.
    pub fn search(&self, query: &str, limit: usize) -> AxiomResult<Vec<SearchHit>> {
        let vector = self.embedder.embed(query)?;
        self.store.search(&vector, limit)
    }

    /// Retrieval-augmented question answering.
    ///
    /// With no matching documents the fixed no-match answer is returned and
    /// the generator is never invoked: an answer fabricated from nothing is
    /// worse than no answer. A generator failure degrades, the retrieved
    /// context is still returned so the caller can read the sources directly.
    pub fn chat(&self, question: &str, limit: usize) -> AxiomResult<ChatResponse> {
        let hits = self.search(question, limit)?;
        if hits.is_empty() {
            debug!("no valid documents matched, skipping generation");
            return Ok(ChatResponse {
                answer: NO_MATCH_ANSWER.to_string(),
                context: Vec::new(),
            });
        }

        let context = render_context(&hits);
        let answer = match &self.generator {
            Some(generator) => match generator.generate(SYSTEM_PROMPT, &context, question) {
                Ok(answer) => answer,
                Err(err) => {
                    warn!(provider = generator.name(), error = %err, "generation failed, degrading");
                    degraded_answer()
                }
            },
            None => degraded_answer(),
        };

        Ok(ChatResponse {
            answer,
            context: hits,
        })
    }
}

/// One line per hit, labeled by origin so the model can cite sources.
fn render_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("Source ({}): {}", hit.source_label(), hit.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn degraded_answer() -> String {
    "Answer generation is currently unavailable. The most relevant documents \
     are included below."
        .to_string()
}
